//! Lexicard: a vocabulary trainer
//!
//! The library holds the domain core. Views (the CLI and TUI in `src/bin/cli`)
//! read from a [`store::WordStore`] and send commands back to it.

pub mod config;
pub mod flashcards;
pub mod quiz;
pub mod services;
pub mod storage;
pub mod store;
pub mod words;

use config::Config;
use storage::FileKeyValueStore;
use store::WordStore;

/// The store type the binaries run against
pub type FileWordStore = WordStore<FileKeyValueStore>;

/// Open the file-backed store for `config`, seeded with the built-in catalog
pub fn open_store(config: &Config) -> storage::Result<FileWordStore> {
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => FileKeyValueStore::default_data_dir()?,
    };

    let mut store = WordStore::load(words::catalog::seed(), FileKeyValueStore::new(data_dir));
    store.set_selected_level(config.default_level);
    Ok(store)
}
