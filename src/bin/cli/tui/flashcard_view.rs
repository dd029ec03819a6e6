use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::app_state::TuiState;
use super::word_list::level_style;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let words = state.flashcard_words();
    let session = &state.flashcards;

    let title = format!(
        " Flashcards {} \u{00b7} {} ",
        state.app.store.selected_level(),
        session.position_label(words.len())
    );
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let Some(word) = session.current(&words) else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No words at this level. Press 'v' to change the level.",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(empty, inner);
        return;
    };

    // Card centered, nudged sideways while dragging
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(inner);
    let card_width = (inner.width * 3 / 5).max(20).min(inner.width);
    let shift = (session.drag_offset() / 10.0) as i32;
    let base_x = i32::from(inner.x) + i32::from((inner.width - card_width) / 2);
    let max_x = i32::from(inner.x + inner.width - card_width);
    let card_x = (base_x + shift).clamp(i32::from(inner.x), max_x) as u16;
    let card = Rect {
        x: card_x,
        y: rows[1].y,
        width: card_width,
        height: rows[1].height,
    };

    let armed = session.drag_offset().abs() > session.swipe_threshold();
    let border = if armed { Color::Yellow } else { Color::White };
    let favorite = if word.is_favorite { " \u{2605}" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", word.level, favorite))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            word.term.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    if session.show_answer() {
        lines.push(Line::from(Span::styled(word.native_meaning.clone(), level_style(word.level))).alignment(Alignment::Center));
        lines.push(Line::from(""));
        lines.push(Line::from(word.definition.clone()).alignment(Alignment::Center));
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(word.example.clone(), Style::default().add_modifier(Modifier::ITALIC)))
                .alignment(Alignment::Center),
        );
    } else {
        lines.push(
            Line::from(Span::styled("Space to reveal", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
        );
    }

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), card);

    // Navigation hints under the card
    let previous = if session.can_go_previous() { "\u{2190} h" } else { "   " };
    let next = if session.can_go_next(words.len()) { "l \u{2192}" } else { "   " };
    let hints = Paragraph::new(Line::from(vec![
        Span::styled(previous, Style::default().fg(Color::Cyan)),
        Span::raw("     "),
        Span::styled(next, Style::default().fg(Color::Cyan)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hints, rows[2]);
}
