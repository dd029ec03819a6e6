use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::app_state::{Screen, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let words = state.visible_words();

    let mut title = format!(" {} ({}) ", state.screen.title(), words.len());
    if state.favorites_only {
        title.push_str("\u{2605} ");
    }
    if !state.search_input.is_empty() {
        title.push_str(&format!("/{} ", state.search_input));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if words.is_empty() {
        let hint = match state.screen {
            Screen::Dictionary => "  No saved words. Press 'a' on a word to add it.",
            _ => "  No words match the current filter.",
        };
        let empty = List::new(vec![ListItem::new(hint).style(Style::default().fg(Color::DarkGray))])
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = words
        .iter()
        .map(|word| {
            let favorite = if word.is_favorite { "\u{2605}" } else { " " };
            let saved = if word.is_in_personal_dictionary { "+" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(favorite, Style::default().fg(Color::Yellow)),
                Span::styled(saved, Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::styled(format!("{:<2}", word.level), level_style(word.level)),
                Span::raw(" "),
                Span::styled(word.term.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", word.native_meaning),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.list_selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

pub fn level_style(level: lexicard_lib::words::Level) -> Style {
    use lexicard_lib::words::Level;

    let color = match level {
        Level::A1 | Level::A2 => Color::Green,
        Level::B1 | Level::B2 => Color::Blue,
        Level::C1 | Level::C2 => Color::Magenta,
        Level::All => Color::White,
    };
    Style::default().fg(color)
}
