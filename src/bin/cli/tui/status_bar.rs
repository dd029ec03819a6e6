use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Screen, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.screen {
        Screen::Words | Screen::Dictionary => {
            " /: search  v: level  *: favorites  f: favorite  a: dictionary  Enter: quiz  ?: help  q: quit "
        }
        Screen::Flashcards => {
            " h/l: previous/next  Space: flip  f: favorite  a: dictionary  p: speak  ?: help  q: quit "
        }
        Screen::Quiz => " Type your answer  Enter: check/next  Esc: back  Tab: switch screen ",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
