use anyhow::Result;

use lexicard_lib::words::{Level, WordFilter};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let counts: Vec<(Level, usize, usize)> = Level::ALL_FILTERS
        .iter()
        .map(|&level| {
            let filter = WordFilter::new().level(level);
            (
                level,
                app.store.filtered_catalog(&filter).len(),
                app.store.filtered_personal_dictionary(&filter).len(),
            )
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = counts
                .iter()
                .map(|(level, words, saved)| {
                    serde_json::json!({
                        "level": level,
                        "wordCount": words,
                        "personalDictionaryCount": saved,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{:<6} {:>6} {:>10}", "Level", "Words", "Dictionary");
            println!("{} {} {}", "\u{2500}".repeat(6), "\u{2500}".repeat(6), "\u{2500}".repeat(10));
            for (level, words, saved) in &counts {
                let current = if *level == app.store.selected_level() { "*" } else { "" };
                println!("{:<6} {:>6} {:>10} {}", level, words, saved, current);
            }
        }
    }

    Ok(())
}
