use crate::error::StoreResult;
use crate::models::AddressBook;
use std::path::PathBuf;
use tracing::{info, warn};

/// Storage for the address book between sessions.
///
/// Provides abstraction over where and how the book is kept,
/// enabling different implementations (JSON file, in-memory mock).
pub trait AddressBookStore {
    /// Load the stored book, or `None` if nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<AddressBook>>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StoreResult<()>;

    /// Move unreadable stored data out of the way so the next save does not
    /// overwrite it. Returns where it was moved, if anywhere.
    fn quarantine(&self) -> StoreResult<Option<PathBuf>> {
        Ok(None)
    }

    /// Load the stored book, starting empty when there is none or it cannot
    /// be read.
    fn load_or_default(&self) -> AddressBook {
        match self.load() {
            Ok(Some(book)) => {
                info!("Loaded address book with {} records", book.len());
                book
            }
            Ok(None) => {
                info!("No saved address book found, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                warn!("Failed to load address book, starting empty: {}", e);
                match self.quarantine() {
                    Ok(Some(path)) => warn!("Unreadable address book moved to {}", path.display()),
                    Ok(None) => {}
                    Err(e) => warn!("Failed to move unreadable address book aside: {}", e),
                }
                AddressBook::new()
            }
        }
    }
}
