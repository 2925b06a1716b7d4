use crate::error::{StoreError, StoreResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the address book.
///
/// ```json
/// { "version": 1,
///   "records": [ { "name": "Alice", "phones": ["0123456789"], "birthday": "1990-06-12" } ] }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Only the version, so a newer file is reported as such instead of as a
/// parse error on its records.
#[derive(Debug, Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Address book store backed by a versioned JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the next unreadable file will be moved to: `<path>.bak`, or
    /// `<path>.bak.N` with the first free `N` when earlier copies exist.
    pub fn quarantine_path(&self) -> PathBuf {
        let mut base = self.path.as_os_str().to_owned();
        base.push(".bak");
        let base = PathBuf::from(base);

        let mut candidate = base.clone();
        let mut n = 0u32;
        while candidate.exists() {
            n += 1;
            let mut name = base.as_os_str().to_owned();
            name.push(format!(".{}", n));
            candidate = PathBuf::from(name);
        }
        candidate
    }

    /// Decode file contents into an address book.
    pub fn decode(contents: &str) -> StoreResult<AddressBook> {
        let probe: VersionProbe = serde_json::from_str(contents)?;
        if probe.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(probe.version));
        }

        let stored: StoredBook = serde_json::from_str(contents)?;
        Ok(stored.records.into_iter().collect())
    }

    /// Encode an address book as pretty-printed JSON.
    pub fn encode(book: &AddressBook) -> StoreResult<String> {
        let stored = StoredBook {
            version: FORMAT_VERSION,
            records: book.iter().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&stored)?)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl AddressBookStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let book = Self::decode(&contents)?;
        debug!(
            "Read {} records from {}",
            book.len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let contents = Self::encode(book)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        // Write next to the target and rename so a failed write keeps the old file
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, contents).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Wrote {} records to {}", book.len(), self.path.display());
        Ok(())
    }

    fn quarantine(&self) -> StoreResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| self.io_error(e))?;
        Ok(Some(target))
    }
}
