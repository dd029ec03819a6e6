use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let matches = state.visible_words().len();
    let input_text = format!("/{}", state.search_input);
    let input_widget = Paragraph::new(Line::from(vec![
        Span::styled(input_text, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("   {} match{}  Enter: keep  Esc: clear", matches, if matches == 1 { "" } else { "es" }),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    f.render_widget(input_widget, area);

    // Set cursor position
    let cursor_x = area.x + 1 + state.search_input.chars().count() as u16;
    f.set_cursor_position(Position::new(cursor_x, area.y));
}
