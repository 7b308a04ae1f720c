//! Persistence for the live overrides.
//!
//! The editor never touches storage directly; it is handed a [`Store`] and
//! reads and writes opaque string values under a key. Two implementations are
//! provided:
//!
//! - [`MemoryStore`] - process-local, for tests and one-shot rendering
//! - [`FileStore`] - one `<key>.json` file per key under a directory

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

/// Errors raised by a [`Store`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key `{0}`")]
    InvalidKey(String),

    #[error("cannot access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A string key-value store.
pub trait Store {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// A store that lives only as long as the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store that keeps each key in its own JSON file.
///
/// The directory is created on the first write. Writes go to a temporary file
/// that is then renamed over the target, so a reader never sees a partial
/// value.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is empty or would escape
    /// the store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(path:? = path; "Read stored value");
                Ok(Some(value))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&path)(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.directory).map_err(io_error(&self.directory))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(io_error(&tmp_path))?;
        fs::rename(&tmp_path, &path).map_err(io_error(&path))?;

        debug!(path:? = path, bytes = value.len(); "Wrote stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path)(err)),
        }
    }
}
