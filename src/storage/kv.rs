use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A local blob store addressed by string keys
pub trait KeyValueStore {
    /// Read the blob under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Drop the blob under `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keys map to file names, so only a safe character set is allowed
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// File-backed store
///
/// Layout:
/// ```text
/// {data-dir}/
/// └── {key}.json
/// ```
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("lexicard"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        // Write then rename so readers never see a partial blob
        let tmp_path = self.base_path.join(format!(".{}.json.tmp", key));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("personalDictionary").is_ok());
        assert!(validate_key("a-b_c1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("with space").is_err());
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().to_path_buf());
        assert!(store.get("nothing").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("data");
        let mut store = FileKeyValueStore::new(base.clone());

        store.set("blob", b"first").unwrap();
        store.set("blob", b"second").unwrap();

        assert_eq!(store.get("blob").unwrap().as_deref(), Some(&b"second"[..]));
        assert!(base.join("blob.json").exists());
        assert!(!base.join(".blob.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path().to_path_buf());

        store.set("blob", b"data").unwrap();
        store.remove("blob").unwrap();
        store.remove("blob").unwrap();
        assert!(store.get("blob").unwrap().is_none());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.set("../x", b"data"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
