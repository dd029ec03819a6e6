use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::ServiceError;

/// How long a word counts as "being pronounced" after speaking starts
pub const PRONUNCIATION_RESET: Duration = Duration::from_secs(2);

/// Text-to-speech collaborator
pub trait SpeechSynthesizer {
    /// Start speaking `text`; returns once playback has been started
    fn speak(&self, text: &str, language: &str) -> Result<(), ServiceError>;
}

/// Speech that does nothing, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

impl SpeechSynthesizer for SilentSpeech {
    fn speak(&self, _text: &str, _language: &str) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Speech through an external program such as `espeak-ng` or `say`
///
/// `{text}` and `{lang}` in the arguments are substituted per call. The child
/// runs detached; a background thread reaps it.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    command: String,
    args: Vec<String>,
}

impl CommandSpeech {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments with placeholders filled in
    pub fn resolved_args(&self, text: &str, language: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{text}", text).replace("{lang}", language))
            .collect()
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn speak(&self, text: &str, language: &str) -> Result<(), ServiceError> {
        let mut child = Command::new(&self.command)
            .args(self.resolved_args(text, language))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ServiceError::Launch {
                command: self.command.clone(),
                source: e,
            })?;

        log::debug!("Speaking {:?} with {} (pid {})", text, self.command, child.id());
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// "Currently pronouncing" flag that switches itself off after
/// [`PRONUNCIATION_RESET`]
///
/// Callers pass the current instant, so the UI loop drives the reset.
#[derive(Debug, Default, Clone, Copy)]
pub struct PronunciationState {
    playing_until: Option<Instant>,
}

impl PronunciationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        self.playing_until = Some(now + PRONUNCIATION_RESET);
    }

    pub fn is_playing(&self, now: Instant) -> bool {
        self.playing_until.is_some_and(|until| now < until)
    }

    /// Drop an expired deadline; returns whether playback just ended
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.playing_until {
            Some(until) if now >= until => {
                self.playing_until = None;
                true
            }
            _ => false,
        }
    }
}
