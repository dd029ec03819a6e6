//! Vocabulary words for Lexicard
//!
//! This module provides:
//! - The `Word` entity and CEFR `Level` tags
//! - The built-in word catalog
//! - Level, favorite and search filtering

pub mod catalog;
pub mod filter;
pub mod models;

pub use filter::WordFilter;
pub use models::*;
