use std::time::Instant;

use ratatui::prelude::Rect;

use crate::app::App;
use lexicard_lib::flashcards::{FlashcardSession, SwipeOutcome};
use lexicard_lib::quiz::QuizSession;
use lexicard_lib::services::PronunciationState;
use lexicard_lib::words::{Word, WordFilter, WordId};

/// Horizontal pixels one terminal column of mouse drag stands for
const DRAG_PIXELS_PER_COLUMN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Words,
    Dictionary,
    Flashcards,
    Quiz,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Words, Screen::Dictionary, Screen::Flashcards, Screen::Quiz];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Words => "Words",
            Screen::Dictionary => "Dictionary",
            Screen::Flashcards => "Flashcards",
            Screen::Quiz => "Quiz",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_list(self) -> bool {
        matches!(self, Screen::Words | Screen::Dictionary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Search,
}

pub struct TuiState {
    pub app: App,
    pub screen: Screen,
    pub mode: Mode,

    // List state (Words and Dictionary screens)
    pub favorites_only: bool,
    pub search_input: String,
    pub list_selected: usize,

    pub flashcards: FlashcardSession,
    pub drag_origin: Option<u16>,

    pub quiz: QuizSession,
    pub quiz_word: Option<WordId>,

    pub pronunciation: PronunciationState,

    // Key state for multi-char sequences
    pub pending_key: Option<char>,

    // Panel areas for mouse hit-testing (updated each draw)
    pub list_area: Option<Rect>,
    pub card_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let flashcards = FlashcardSession::with_swipe_threshold(app.config.flashcards.swipe_threshold);
        let quiz = QuizSession::new().with_trimmed_answers(app.config.quiz.trim_answers);

        Self {
            app,
            screen: Screen::Words,
            mode: Mode::Browse,
            favorites_only: false,
            search_input: String::new(),
            list_selected: 0,
            flashcards,
            drag_origin: None,
            quiz,
            quiz_word: None,
            pronunciation: PronunciationState::new(),
            pending_key: None,
            list_area: None,
            card_area: None,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    // ==================== Screens ====================

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.mode = Mode::Browse;
        self.drag_origin = None;
        self.clamp_list();
        let count = self.flashcard_words().len();
        self.flashcards.clamp_to(count);
    }

    // ==================== Lists ====================

    pub fn current_filter(&self) -> WordFilter {
        WordFilter::new()
            .level(self.app.store.selected_level())
            .favorites_only(self.favorites_only)
            .query(self.search_input.clone())
    }

    /// Words on the active list screen, recomputed from current flags
    pub fn visible_words(&self) -> Vec<&Word> {
        let filter = self.current_filter();
        match self.screen {
            Screen::Dictionary => self.app.store.filtered_personal_dictionary(&filter),
            _ => self.app.store.filtered_catalog(&filter),
        }
    }

    pub fn selected_word(&self) -> Option<&Word> {
        self.visible_words().get(self.list_selected).copied()
    }

    pub fn list_move_down(&mut self) {
        let count = self.visible_words().len();
        if self.list_selected + 1 < count {
            self.list_selected += 1;
        }
    }

    pub fn list_move_up(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    pub fn list_go_top(&mut self) {
        self.list_selected = 0;
    }

    pub fn list_go_bottom(&mut self) {
        self.list_selected = self.visible_words().len().saturating_sub(1);
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_list(&mut self) {
        let count = self.visible_words().len();
        self.list_selected = self.list_selected.min(count.saturating_sub(1));
    }

    pub fn search_changed(&mut self) {
        self.list_selected = 0;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
        self.clamp_list();
    }

    pub fn cycle_level(&mut self) {
        let level = self.app.store.selected_level().next_filter();
        self.app.store.set_selected_level(level);
        self.flashcards.reset();
        self.clamp_list();
        self.flash_message = Some(format!("Level: {}", level));
    }

    // ==================== Commands on the focused word ====================

    /// Word the current screen is focused on, if any
    pub fn focused_id(&self) -> Option<WordId> {
        match self.screen {
            Screen::Words | Screen::Dictionary => self.selected_word().map(Word::id),
            Screen::Flashcards => self.current_card().map(Word::id),
            Screen::Quiz => self.quiz_word,
        }
    }

    pub fn toggle_favorite(&mut self) {
        let Some(id) = self.focused_id() else {
            return;
        };
        self.app.store.toggle_favorite(id);
        self.clamp_list();
        self.note_save_error();
    }

    pub fn toggle_dictionary(&mut self) {
        let Some(id) = self.focused_id() else {
            return;
        };
        if self.app.store.is_in_catalog(id) {
            self.app.store.toggle_personal_dictionary(id);
        } else {
            self.app.store.remove_from_personal_dictionary(id);
        }

        let message = match self.app.store.word(id) {
            Some(word) if word.is_in_personal_dictionary => {
                format!("Added {} to the personal dictionary", word.term)
            }
            Some(word) => format!("Removed {} from the personal dictionary", word.term),
            None => "Removed from the personal dictionary".to_string(),
        };
        self.flash_message = Some(message);
        self.clamp_list();
        self.note_save_error();
    }

    pub fn speak_focused(&mut self, now: Instant) {
        let Some(word) = self.focused_id().and_then(|id| self.app.store.word(id)) else {
            return;
        };
        let term = word.term.clone();

        match self.app.speech.speak(&term, &self.app.config.speech.language) {
            Ok(()) => self.pronunciation.start(now),
            Err(e) => {
                log::warn!("Speech failed: {}", e);
                self.flash_message = Some(format!("Speech failed: {}", e));
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.pronunciation.tick(now);
    }

    fn note_save_error(&mut self) {
        if let Some(e) = self.app.store.last_save_error() {
            self.flash_message = Some(format!("Not saved: {}", e));
        }
    }

    // ==================== Flashcards ====================

    pub fn flashcard_words(&self) -> Vec<&Word> {
        self.app.store.level_words()
    }

    pub fn current_card(&self) -> Option<&Word> {
        self.flashcards.current(&self.flashcard_words())
    }

    pub fn flashcard_next(&mut self) {
        let count = self.flashcard_words().len();
        self.flashcards.next(count);
    }

    pub fn flashcard_previous(&mut self) {
        self.flashcards.previous();
    }

    pub fn begin_drag(&mut self, column: u16) {
        self.drag_origin = Some(column);
    }

    pub fn update_drag(&mut self, column: u16) {
        if let Some(origin) = self.drag_origin {
            let columns = f32::from(column) - f32::from(origin);
            self.flashcards.drag(columns * DRAG_PIXELS_PER_COLUMN);
        }
    }

    pub fn end_drag(&mut self) -> Option<SwipeOutcome> {
        self.drag_origin.take()?;
        let count = self.flashcard_words().len();
        Some(self.flashcards.release(count))
    }

    // ==================== Quiz ====================

    /// Quiz the focused word from a list or the flashcards
    pub fn start_quiz(&mut self) {
        let Some(id) = self.focused_id() else {
            return;
        };
        self.quiz_word = Some(id);
        self.quiz.restart();
        self.switch_screen(Screen::Quiz);
    }

    pub fn quiz_word(&self) -> Option<&Word> {
        self.quiz_word.and_then(|id| self.app.store.word(id))
    }

    /// Enter on the quiz: grade the answer, or move on once graded
    pub fn quiz_submit(&mut self) {
        if self.quiz.show_result() {
            self.quiz.next_question();
            return;
        }
        let Some(id) = self.quiz_word else {
            return;
        };
        if let Some(word) = self.app.store.word(id) {
            self.quiz.check_answer(word);
        }
    }

    pub fn quiz_type(&mut self, c: char) {
        if !self.quiz.show_result() {
            self.quiz.answer.push(c);
        }
    }

    pub fn quiz_backspace(&mut self) {
        if !self.quiz.show_result() {
            self.quiz.answer.pop();
        }
    }
}
