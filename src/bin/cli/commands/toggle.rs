use anyhow::{Context, Result};

use lexicard_lib::words::{Word, WordId};

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run_favorite(app: &mut App, term: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let id = app.find_word(term)?;
    app.store.toggle_favorite(id);
    app.warn_on_save_error();

    let word = updated(app, id)?;
    let message = if word.is_favorite {
        format!("Added {} to favorites", word.term)
    } else {
        format!("Removed {} from favorites", word.term)
    };
    report(word, &message, format, use_color)
}

pub fn run_dictionary(app: &mut App, term: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let id = app.find_word(term)?;
    if app.store.is_in_catalog(id) {
        app.store.toggle_personal_dictionary(id);
    } else {
        // Dictionary entry whose word left the catalog: only removal makes sense
        app.store.remove_from_personal_dictionary(id);
    }
    app.warn_on_save_error();

    match app.store.word(id) {
        Some(word) => {
            let message = if word.is_in_personal_dictionary {
                format!("Added {} to the personal dictionary", word.term)
            } else {
                format!("Removed {} from the personal dictionary", word.term)
            };
            report(word, &message, format, use_color)
        }
        None => {
            println!("Removed {} from the personal dictionary", term);
            Ok(())
        }
    }
}

fn updated(app: &App, id: WordId) -> Result<&Word> {
    app.store.word(id).context("Word not found after update")
}

fn report(word: &Word, message: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(word)?);
        }
        OutputFormat::Plain => {
            if use_color {
                println!("{}{}{}", Color::GREEN, message, Color::RESET);
            } else {
                println!("{}", message);
            }
        }
    }
    Ok(())
}
