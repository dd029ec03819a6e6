mod kv;
mod memory;

pub use kv::{FileKeyValueStore, KeyValueStore, Result, StorageError};
pub use memory::MemoryKeyValueStore;
