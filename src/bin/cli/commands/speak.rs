use anyhow::{Context, Result};

use lexicard_lib::config::Config;

use crate::app::App;

pub fn run(app: &App, term: &str) -> Result<()> {
    let word = app.word(term)?;
    let language = &app.config.speech.language;

    if app.config.speech.command.is_none() {
        println!(
            "No speech command configured; set [speech] command in {}",
            Config::config_path().display()
        );
        return Ok(());
    }

    app.speech
        .speak(&word.term, language)
        .with_context(|| format!("Failed to pronounce '{}'", word.term))?;
    println!("Pronouncing {} ({})", word.term, language);
    Ok(())
}
