use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lexicard_lib::quiz::QuestionType;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let quiz = &state.quiz;
    let step = quiz.question().index() + 1;

    let block = Block::default()
        .title(format!(" Quiz \u{00b7} question {}/{} ", step, QuestionType::ORDER.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(word) = state.quiz_word() else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Pick a word on the Words screen and press Enter to quiz it.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", quiz.prompt(word)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(Color::Yellow)),
            Span::raw(quiz.answer.clone()),
            Span::styled(
                if quiz.show_result() { "" } else { "\u{2588}" },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];

    match quiz.last_result() {
        Some(true) if quiz.show_result() => {
            lines.push(Line::from(Span::styled(
                "  Correct!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        Some(false) if quiz.show_result() => {
            lines.push(Line::from(Span::styled(
                "  Not quite.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("  Answer: ", Style::default().fg(Color::DarkGray)),
                Span::raw(quiz.expected(word).to_string()),
            ]));
        }
        _ => {}
    }

    lines.push(Line::from(""));
    let hint = if quiz.show_result() {
        "  Enter: next question  Esc: back to words"
    } else {
        "  Enter: check  Esc: back to words"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
