use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;
use super::word_list::level_style;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(" Word ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(word) = state.selected_word() else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "  Select a word to see its details.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let speaker = if state.pronunciation.is_playing(Instant::now()) {
        Span::styled("  \u{266a} playing", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("  p: pronounce", label)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                word.term.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(word.level.to_string(), level_style(word.level)),
            speaker,
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Turkish   ", label), Span::raw(word.native_meaning.clone())]),
        Line::from(vec![Span::styled("Meaning   ", label), Span::raw(word.definition.clone())]),
        Line::from(vec![
            Span::styled("Example   ", label),
            Span::styled(word.example.clone(), Style::default().add_modifier(Modifier::ITALIC)),
        ]),
        Line::from(""),
    ];

    match state.app.images.image_for(&word.term) {
        Some(image) => lines.push(Line::from(vec![
            Span::styled("Image     ", label),
            Span::styled(image.url, Style::default().fg(Color::Blue)),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled("Image     ", label),
            Span::styled("(none)", label),
        ])),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            if word.is_favorite { "\u{2605} favorite" } else { "\u{2606} not a favorite" },
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            if word.is_in_personal_dictionary {
                "+ in your dictionary"
            } else {
                "  not saved"
            },
            Style::default().fg(Color::Green),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
