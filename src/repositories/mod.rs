mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, FORMAT_VERSION};
pub use traits::AddressBookStore;
