use address_book::error::{StoreError, StoreResult};
use address_book::models::AddressBook;
use address_book::repositories::AddressBookStore;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock address book store for testing.
///
/// Keeps the saved book in memory, can be told to fail loads, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockAddressBookStore {
    saved: RefCell<Option<AddressBook>>,
    fail_load: bool,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockAddressBookStore {
    /// Create a new empty MockAddressBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: RefCell::new(Some(book)),
            ..Self::default()
        }
    }

    /// Create a store whose loads always fail.
    pub fn failing() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    /// The last saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl AddressBookStore for MockAddressBookStore {
    fn load(&self) -> StoreResult<Option<AddressBook>> {
        self.track_call("load");
        if self.fail_load {
            return Err(StoreError::UnsupportedVersion(99));
        }
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        self.track_call("save");
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }

    fn quarantine(&self) -> StoreResult<Option<std::path::PathBuf>> {
        self.track_call("quarantine");
        Ok(None)
    }
}
