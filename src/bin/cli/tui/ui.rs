use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

use super::app_state::{Mode, Screen, TuiState};
use super::{detail_widget, flashcard_view, quiz_view, search_bar, status_bar, word_list};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Screen tabs + main area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let tabs_area = outer[0];
    let main_area = outer[1];
    let status_area = outer[2];

    draw_tabs(f, tabs_area, state);

    state.list_area = None;
    state.card_area = None;

    match state.screen {
        Screen::Words | Screen::Dictionary => {
            // Horizontal split: list (40%) | detail (60%)
            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(40),
                    Constraint::Percentage(60),
                ])
                .split(main_area);

            state.list_area = Some(panels[0]);
            word_list::draw(f, panels[0], state);
            detail_widget::draw(f, panels[1], state);
        }
        Screen::Flashcards => {
            state.card_area = Some(main_area);
            flashcard_view::draw(f, main_area, state);
        }
        Screen::Quiz => quiz_view::draw(f, main_area, state),
    }

    if state.mode == Mode::Search {
        search_bar::draw(f, status_area, state);
    } else {
        status_bar::draw(f, status_area, state);
    }

    if state.show_help {
        draw_help(f, size);
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, state: &TuiState) {
    let titles: Vec<String> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.title()))
        .collect();

    let level = format!(" {} ", state.app.store.selected_level());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(level.len() as u16)])
        .split(area);

    let tabs = Tabs::new(titles)
        .select(state.screen.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let level_badge = Paragraph::new(level)
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(level_badge, chunks[1]);
}

const HELP_LINES: [(&str, &str); 14] = [
    ("Tab / 1-4", "switch screen"),
    ("j/k, Up/Down", "move in the list"),
    ("gg / G", "top / bottom"),
    ("/", "search terms"),
    ("v", "cycle level filter"),
    ("*", "favorites only"),
    ("f / Space", "toggle favorite"),
    ("a", "add to / remove from dictionary"),
    ("p", "pronounce"),
    ("Enter", "quiz the focused word"),
    ("h/l, Left/Right", "previous / next card"),
    ("Space (cards)", "show / hide the answer"),
    ("drag (cards)", "swipe to the next / previous card"),
    ("q, Ctrl-C", "quit"),
];

fn draw_help(f: &mut Frame, area: Rect) {
    let width = 56.min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<18}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Keys (? to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
