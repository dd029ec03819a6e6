//! Personal dictionary blob
//!
//! The whole personal dictionary is stored as one JSON array of words under
//! [`PERSONAL_DICTIONARY_KEY`], rewritten in full after every change.

use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};
use crate::words::Word;

/// Key of the personal dictionary blob
pub const PERSONAL_DICTIONARY_KEY: &str = "personalDictionary";

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn encode(words: &[Word]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(words)
}

pub fn decode(bytes: &[u8]) -> serde_json::Result<Vec<Word>> {
    serde_json::from_slice(bytes)
}

/// Read the persisted personal dictionary
///
/// Missing, unreadable or corrupt data all yield an empty list.
pub fn load_personal_dictionary<S: KeyValueStore>(backend: &S) -> Vec<Word> {
    match backend.get(PERSONAL_DICTIONARY_KEY) {
        Ok(Some(bytes)) if bytes.is_empty() => Vec::new(),
        Ok(Some(bytes)) => match decode(&bytes) {
            Ok(words) => words,
            Err(e) => {
                log::warn!("Discarding unreadable personal dictionary: {}", e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to read personal dictionary: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the persisted personal dictionary with `words`
pub fn save_personal_dictionary<S: KeyValueStore>(
    backend: &mut S,
    words: &[Word],
) -> Result<(), PersistenceError> {
    let bytes = encode(words)?;
    backend.set(PERSONAL_DICTIONARY_KEY, &bytes)?;
    log::debug!("Saved {} personal dictionary entries", words.len());
    Ok(())
}
