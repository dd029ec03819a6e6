use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, term: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let word = app.word(term)?;
    let image = app.images.image_for(&word.term);

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(word)?;
            value["imageUrl"] = match &image {
                Some(image) => serde_json::Value::String(image.url.clone()),
                None => serde_json::Value::Null,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            for line in terminal::render_detail(word, image.as_ref(), use_color) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
