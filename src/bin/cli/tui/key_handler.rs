use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{Mode, Screen, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if state.mode == Mode::Search {
        handle_search_key(state, key);
        return;
    }

    match state.screen {
        Screen::Words | Screen::Dictionary => handle_list_key(state, key),
        Screen::Flashcards => handle_flashcard_key(state, key),
        Screen::Quiz => handle_quiz_key(state, key),
    }
}

/// Keys shared by the list and flashcard screens; returns whether it was handled
fn handle_common_key(state: &mut TuiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Tab => state.switch_screen(state.screen.next()),
        KeyCode::BackTab => state.switch_screen(state.screen.previous()),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            state.switch_screen(Screen::ALL[idx]);
        }
        KeyCode::Char('v') => state.cycle_level(),
        KeyCode::Char('f') => state.toggle_favorite(),
        KeyCode::Char('a') => state.toggle_dictionary(),
        KeyCode::Char('p') => state.speak_focused(Instant::now()),
        KeyCode::Enter => state.start_quiz(),
        KeyCode::Char('?') => state.show_help = !state.show_help,
        _ => return false,
    }
    true
}

fn handle_list_key(state: &mut TuiState, key: KeyEvent) {
    // Handle pending 'g' key
    if state.pending_key == Some('g') {
        state.pending_key = None;
        if key.code == KeyCode::Char('g') {
            state.list_go_top();
            return;
        }
        // Not 'gg', ignore
    }

    if handle_common_key(state, key) {
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.list_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.list_move_up(),
        KeyCode::Char('g') => {
            state.pending_key = Some('g');
        }
        KeyCode::Char('G') => state.list_go_bottom(),
        KeyCode::Char(' ') => state.toggle_favorite(),
        KeyCode::Char('*') => state.toggle_favorites_only(),
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
        }
        KeyCode::Esc => {
            state.search_input.clear();
            state.search_changed();
        }
        _ => {}
    }
}

fn handle_flashcard_key(state: &mut TuiState, key: KeyEvent) {
    if handle_common_key(state, key) {
        return;
    }

    match key.code {
        KeyCode::Char('l') | KeyCode::Right => state.flashcard_next(),
        KeyCode::Char('h') | KeyCode::Left => state.flashcard_previous(),
        KeyCode::Char(' ') => state.flashcards.toggle_answer(),
        _ => {}
    }
}

fn handle_quiz_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.switch_screen(Screen::Words),
        KeyCode::Tab => state.switch_screen(state.screen.next()),
        KeyCode::BackTab => state.switch_screen(state.screen.previous()),
        KeyCode::Enter => state.quiz_submit(),
        KeyCode::Backspace => state.quiz_backspace(),
        KeyCode::Char(c) => state.quiz_type(c),
        _ => {}
    }
}

fn handle_search_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Browse;
            state.search_input.clear();
            state.search_changed();
        }
        KeyCode::Enter => {
            state.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.search_changed();
        }
        KeyCode::Down => state.list_move_down(),
        KeyCode::Up => state.list_move_up(),
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.search_changed();
        }
        _ => {}
    }
}

fn contains(area: Option<ratatui::prelude::Rect>, col: u16, row: u16) -> bool {
    area.is_some_and(|a| col >= a.x && col < a.x + a.width && row >= a.y && row < a.y + a.height)
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match (state.screen, mouse.kind) {
        (Screen::Flashcards, MouseEventKind::Down(MouseButton::Left)) => {
            if contains(state.card_area, col, row) {
                state.begin_drag(col);
            }
        }
        (Screen::Flashcards, MouseEventKind::Drag(MouseButton::Left)) => {
            state.update_drag(col);
        }
        (Screen::Flashcards, MouseEventKind::Up(MouseButton::Left)) => {
            state.end_drag();
        }
        (screen, MouseEventKind::Down(MouseButton::Left)) if screen.is_list() => {
            if let Some(area) = state.list_area {
                if contains(Some(area), col, row) {
                    // Account for the border
                    let inner_row = row.saturating_sub(area.y + 1) as usize;
                    let offset = state.list_selected.saturating_sub(area.height.saturating_sub(3) as usize);
                    let clicked = offset + inner_row;
                    if clicked < state.visible_words().len() {
                        state.list_selected = clicked;
                    }
                }
            }
        }
        (screen, MouseEventKind::ScrollDown) if screen.is_list() => state.list_move_down(),
        (screen, MouseEventKind::ScrollUp) if screen.is_list() => state.list_move_up(),
        (Screen::Flashcards, MouseEventKind::ScrollDown) => state.flashcard_next(),
        (Screen::Flashcards, MouseEventKind::ScrollUp) => state.flashcard_previous(),
        _ => {}
    }
}
