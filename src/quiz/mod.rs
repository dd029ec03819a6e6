//! Per-word self-graded quiz
//!
//! Three questions per word (Turkish meaning, definition, example sentence),
//! checked by case-insensitive equality. Results live only for the session.

mod session;

pub use session::{QuestionType, QuizSession};
