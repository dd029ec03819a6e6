//! Data models for vocabulary words

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Namespace for deriving catalog word ids from their terms
const WORD_NAMESPACE: Uuid = Uuid::from_u128(0x6c65_7869_6361_7264_8000_4000_a000_0001);

/// Stable identifier of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(Uuid);

impl WordId {
    /// A fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id for a term, identical across runs
    pub fn from_term(term: &str) -> Self {
        Self(Uuid::new_v5(&WORD_NAMESPACE, term.to_lowercase().as_bytes()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for WordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// CEFR proficiency level
///
/// `All` only exists for filtering; no stored word carries it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    All,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown level '{0}' (expected All, A1, A2, B1, B2, C1 or C2)")]
pub struct ParseLevelError(String);

impl Level {
    /// Every filter value in display order
    pub const ALL_FILTERS: [Level; 7] = [
        Level::All,
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// Levels a word can actually have
    pub const STUDY_LEVELS: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::All => "All",
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    pub fn is_filter_only(&self) -> bool {
        matches!(self, Level::All)
    }

    /// The next filter value, wrapping from C2 back to All
    pub fn next_filter(&self) -> Level {
        let idx = Self::ALL_FILTERS.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL_FILTERS[(idx + 1) % Self::ALL_FILTERS.len()]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_FILTERS
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// A vocabulary entry with its two user flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    id: WordId,
    pub term: String,
    pub definition: String,
    #[serde(rename = "turkishMeaning")]
    pub native_meaning: String,
    #[serde(rename = "exampleSentence")]
    pub example: String,
    pub level: Level,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_in_personal_dictionary: bool,
}

impl Word {
    /// Build a word whose id is derived from its term
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        native_meaning: impl Into<String>,
        example: impl Into<String>,
        level: Level,
    ) -> Self {
        let term = term.into();
        Self::with_id(WordId::from_term(&term), term, definition, native_meaning, example, level)
    }

    pub fn with_id(
        id: WordId,
        term: impl Into<String>,
        definition: impl Into<String>,
        native_meaning: impl Into<String>,
        example: impl Into<String>,
        level: Level,
    ) -> Self {
        debug_assert!(!level.is_filter_only(), "words cannot be stored at level All");
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
            native_meaning: native_meaning.into(),
            example: example.into(),
            level,
            is_favorite: false,
            is_in_personal_dictionary: false,
        }
    }

    pub fn id(&self) -> WordId {
        self.id
    }

    /// Overwrite both user flags from another copy of the same word
    pub fn copy_flags_from(&mut self, other: &Word) {
        self.is_favorite = other.is_favorite;
        self.is_in_personal_dictionary = other.is_in_personal_dictionary;
    }

    pub fn flags_match(&self, other: &Word) -> bool {
        self.is_favorite == other.is_favorite
            && self.is_in_personal_dictionary == other.is_in_personal_dictionary
    }
}
