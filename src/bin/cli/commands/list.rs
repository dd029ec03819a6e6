use anyhow::Result;

use lexicard_lib::words::{Level, WordFilter};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    level: Option<Level>,
    favorites_only: bool,
    search: Option<&str>,
    dictionary: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let filter = WordFilter::new()
        .level(level.unwrap_or(app.store.selected_level()))
        .favorites_only(favorites_only)
        .query(search.unwrap_or_default());

    let words = if dictionary {
        app.store.filtered_personal_dictionary(&filter)
    } else {
        app.store.filtered_catalog(&filter)
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                if dictionary {
                    println!("No words in the personal dictionary match.");
                } else {
                    println!("No words match.");
                }
                return Ok(());
            }

            let term_w = words.iter().map(|w| w.term.chars().count()).max().unwrap_or(4).min(24);
            for word in &words {
                println!("{}", terminal::render_row(word, term_w, use_color));
            }

            println!("\n{} words", words.len());
        }
    }

    Ok(())
}
