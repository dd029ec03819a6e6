use lexicard_lib::services::ImageRef;
use lexicard_lib::words::{Level, Word};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const ITALIC: &'static str = "\x1b[3m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
}

fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", code, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Color used for a level badge
pub fn level_color(level: Level) -> &'static str {
    match level {
        Level::All => Color::DIM,
        Level::A1 | Level::A2 => Color::GREEN,
        Level::B1 | Level::B2 => Color::BLUE,
        Level::C1 | Level::C2 => Color::MAGENTA,
    }
}

/// Markers for the two user flags: "★" favorite, "+" in personal dictionary
pub fn flag_markers(word: &Word) -> String {
    let fav = if word.is_favorite { '\u{2605}' } else { ' ' };
    let dict = if word.is_in_personal_dictionary { '+' } else { ' ' };
    format!("{}{}", fav, dict)
}

/// One list row: flags, level badge, term, Turkish meaning
pub fn render_row(word: &Word, term_width: usize, use_color: bool) -> String {
    let markers = paint(&flag_markers(word), Color::YELLOW, use_color);
    let level = paint(&format!("{:<2}", word.level), level_color(word.level), use_color);
    let term = format!("{:<width$}", word.term, width = term_width);
    let term = paint(&term, Color::BOLD, use_color);
    let meaning = paint(&word.native_meaning, Color::DIM, use_color);
    format!("{} {} {} {}", markers, level, term, meaning)
}

/// Full detail view of a word
pub fn render_detail(word: &Word, image: Option<&ImageRef>, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let title = format!("{}  [{}]", word.term, word.level);
    lines.push(paint(&title, Color::BOLD, use_color));
    lines.push(String::new());

    lines.push(format!("{} {}", paint("Definition:", Color::CYAN, use_color), word.definition));
    lines.push(format!("{} {}", paint("Turkish:   ", Color::CYAN, use_color), word.native_meaning));
    lines.push(format!(
        "{} {}",
        paint("Example:   ", Color::CYAN, use_color),
        paint(&word.example, Color::ITALIC, use_color)
    ));
    lines.push(String::new());

    let favorite = if word.is_favorite { "yes" } else { "no" };
    let in_dict = if word.is_in_personal_dictionary { "yes" } else { "no" };
    lines.push(format!("Favorite: {}   Personal dictionary: {}", favorite, in_dict));

    match image {
        Some(image) => lines.push(format!("Image: {}", image.url)),
        None => lines.push(paint("Image: (none)", Color::DIM, use_color)),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Word {
        Word::new("Apple", "A round fruit", "Elma", "I eat an apple.", Level::A1)
    }

    #[test]
    fn test_flag_markers() {
        let mut word = apple();
        assert_eq!(flag_markers(&word), "  ");
        word.is_favorite = true;
        word.is_in_personal_dictionary = true;
        assert_eq!(flag_markers(&word), "\u{2605}+");
    }

    #[test]
    fn test_plain_row_has_no_escape_codes() {
        let row = render_row(&apple(), 8, false);
        assert_eq!(row, "   A1 Apple    Elma");
    }

    #[test]
    fn test_detail_lists_every_field() {
        let image = ImageRef {
            url: "https://images.example.com/Apple".to_string(),
            alt_text: "Apple".to_string(),
        };
        let text = render_detail(&apple(), Some(&image), false).join("\n");
        assert!(text.starts_with("Apple  [A1]"));
        assert!(text.contains("A round fruit"));
        assert!(text.contains("Elma"));
        assert!(text.contains("I eat an apple."));
        assert!(text.contains("https://images.example.com/Apple"));
    }
}
