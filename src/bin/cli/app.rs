use std::path::Path;

use anyhow::{bail, Context, Result};

use lexicard_lib::config::Config;
use lexicard_lib::services::{ImageProvider, SpeechSynthesizer};
use lexicard_lib::words::{Word, WordId};
use lexicard_lib::FileWordStore;

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub store: FileWordStore,
    pub speech: Box<dyn SpeechSynthesizer>,
    pub images: Box<dyn ImageProvider>,
}

impl App {
    /// Load config and open the store; `data_dir` overrides the config
    pub fn new(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::load(config_path).context("Failed to load config")?;
        if let Some(dir) = data_dir {
            config.data_dir = Some(dir.to_path_buf());
        }

        let store = lexicard_lib::open_store(&config).context("Failed to open word store")?;
        let speech = config.speech_synthesizer();
        let images = config.image_provider();

        Ok(Self {
            config,
            store,
            speech,
            images,
        })
    }

    /// Find a word by term (case-insensitive, exact match first, then prefix)
    ///
    /// Searches the catalog, then personal dictionary entries the catalog no
    /// longer has.
    pub fn find_word(&self, term: &str) -> Result<WordId> {
        let candidates: Vec<&Word> = self
            .store
            .catalog()
            .iter()
            .chain(
                self.store
                    .personal_dictionary()
                    .iter()
                    .filter(|w| !self.store.is_in_catalog(w.id())),
            )
            .collect();

        let term_lower = term.to_lowercase();

        // Exact match first
        if let Some(word) = candidates.iter().find(|w| w.term.to_lowercase() == term_lower) {
            return Ok(word.id());
        }

        // Prefix match
        let matches: Vec<&&Word> = candidates
            .iter()
            .filter(|w| w.term.to_lowercase().starts_with(&term_lower))
            .collect();

        match matches.len() {
            0 => bail!("No word matching '{}'", term),
            1 => Ok(matches[0].id()),
            _ => bail!(
                "Ambiguous term '{}'. Matches:\n{}",
                term,
                matches
                    .iter()
                    .map(|w| format!("  - {}", w.term))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Resolve a term to the word itself
    pub fn word(&self, term: &str) -> Result<&Word> {
        let id = self.find_word(term)?;
        self.store
            .word(id)
            .with_context(|| format!("Word '{}' disappeared from the store", term))
    }

    /// Print a warning if the last save failed; the in-memory change stands
    pub fn warn_on_save_error(&self) {
        if let Some(e) = self.store.last_save_error() {
            eprintln!("warning: personal dictionary was not saved: {}", e);
        }
    }
}
