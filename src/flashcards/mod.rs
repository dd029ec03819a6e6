//! Flashcard review for Lexicard
//!
//! Cards walk the catalog at the selected level: index navigation clamped to
//! the sequence, an answer side that hides again when the card changes, and
//! swipe gestures that turn into next/previous past a threshold.

mod session;

pub use session::{FlashcardSession, SwipeOutcome, DEFAULT_SWIPE_THRESHOLD};
