//! Word store for Lexicard
//!
//! This module provides:
//! - `WordStore`, the view-model every view reads from and sends commands to
//! - The personal dictionary blob codec and its load/save helpers

pub mod persistence;
mod word_store;

pub use persistence::{PersistenceError, PERSONAL_DICTIONARY_KEY};
pub use word_store::WordStore;
