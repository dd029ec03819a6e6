//! External collaborators: pronunciation and word images
//!
//! Both sit behind traits with no-op implementations so the core runs
//! headless.

mod images;
mod speech;

use thiserror::Error;

pub use images::{ImageProvider, ImageRef, NoImages, QueryUrlImages};
pub use speech::{
    CommandSpeech, PronunciationState, SilentSpeech, SpeechSynthesizer, PRONUNCIATION_RESET,
};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to launch speech command '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
