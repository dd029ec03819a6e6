use crate::words::Word;

/// Drag distance past which releasing a card changes it
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// What releasing a dragged card did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Previous,
    SpringBack,
}

/// Navigation state over the level-filtered word sequence
///
/// Every operation takes the current sequence length, so the index stays
/// valid when the sequence shrinks or becomes empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardSession {
    current_index: usize,
    show_answer: bool,
    drag_offset: f32,
    swipe_threshold: f32,
}

impl Default for FlashcardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardSession {
    pub fn new() -> Self {
        Self::with_swipe_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_swipe_threshold(swipe_threshold: f32) -> Self {
        Self {
            current_index: 0,
            show_answer: false,
            drag_offset: 0.0,
            swipe_threshold,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// The card being shown, `None` for an empty sequence
    pub fn current<'a>(&self, words: &[&'a Word]) -> Option<&'a Word> {
        words.get(self.current_index).copied()
    }

    pub fn can_go_next(&self, count: usize) -> bool {
        self.current_index + 1 < count
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance one card; no-op on the last card. Returns whether it moved.
    pub fn next(&mut self, count: usize) -> bool {
        if !self.can_go_next(count) {
            return false;
        }
        self.move_to(self.current_index + 1);
        true
    }

    /// Go back one card; no-op on the first card. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.move_to(self.current_index - 1);
        true
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn drag(&mut self, offset: f32) {
        self.drag_offset = offset;
    }

    /// End a drag. Left past the threshold is next, right is previous.
    pub fn release(&mut self, count: usize) -> SwipeOutcome {
        let offset = std::mem::take(&mut self.drag_offset);
        if offset.abs() <= self.swipe_threshold {
            return SwipeOutcome::SpringBack;
        }

        let moved = if offset < 0.0 {
            self.next(count).then_some(SwipeOutcome::Next)
        } else {
            self.previous().then_some(SwipeOutcome::Previous)
        };
        moved.unwrap_or(SwipeOutcome::SpringBack)
    }

    /// Pull the index back inside a sequence of `count` cards
    pub fn clamp_to(&mut self, count: usize) {
        let max_index = count.saturating_sub(1);
        if self.current_index > max_index {
            self.move_to(max_index);
        }
    }

    /// Start over from the first card, e.g. after the level changes
    pub fn reset(&mut self) {
        self.move_to(0);
        self.drag_offset = 0.0;
    }

    /// "3 / 10" style progress; "0 / 0" when there are no cards
    pub fn position_label(&self, count: usize) -> String {
        if count == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current_index + 1, count)
        }
    }

    fn move_to(&mut self, index: usize) {
        if index != self.current_index {
            self.current_index = index;
            self.show_answer = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Level;

    fn cards() -> Vec<Word> {
        ["Apple", "Book", "Water"]
            .iter()
            .map(|t| Word::new(*t, "", "", "", Level::A1))
            .collect()
    }

    #[test]
    fn test_next_and_previous_clamp_at_boundaries() {
        let mut session = FlashcardSession::new();

        assert!(!session.previous());
        assert_eq!(session.current_index(), 0);

        assert!(session.next(3));
        assert!(session.next(3));
        assert!(!session.next(3));
        assert_eq!(session.current_index(), 2);

        assert!(session.previous());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_boundary_flags() {
        let mut session = FlashcardSession::new();
        assert!(!session.can_go_previous());
        assert!(session.can_go_next(2));
        session.next(2);
        assert!(session.can_go_previous());
        assert!(!session.can_go_next(2));
    }

    #[test]
    fn test_answer_hidden_when_index_changes() {
        let mut session = FlashcardSession::new();
        session.toggle_answer();
        assert!(session.show_answer());

        session.next(3);
        assert!(!session.show_answer());

        session.toggle_answer();
        session.previous();
        assert!(!session.show_answer());
    }

    #[test]
    fn test_answer_kept_on_blocked_move() {
        let mut session = FlashcardSession::new();
        session.toggle_answer();
        session.previous();
        assert!(session.show_answer());
    }

    #[test]
    fn test_empty_sequence_is_safe() {
        let mut session = FlashcardSession::new();
        let words: Vec<&Word> = Vec::new();

        assert!(session.current(&words).is_none());
        assert!(!session.next(0));
        assert!(!session.previous());
        assert_eq!(session.release(0), SwipeOutcome::SpringBack);
        assert_eq!(session.position_label(0), "0 / 0");
    }

    #[test]
    fn test_current_follows_index() {
        let words = cards();
        let refs: Vec<&Word> = words.iter().collect();
        let mut session = FlashcardSession::new();

        assert_eq!(session.current(&refs).unwrap().term, "Apple");
        session.next(refs.len());
        assert_eq!(session.current(&refs).unwrap().term, "Book");
        assert_eq!(session.position_label(refs.len()), "2 / 3");
    }

    #[test]
    fn test_swipe_past_threshold_changes_card() {
        let mut session = FlashcardSession::new();

        session.drag(-150.0);
        assert_eq!(session.release(3), SwipeOutcome::Next);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.drag_offset(), 0.0);

        session.drag(150.0);
        assert_eq!(session.release(3), SwipeOutcome::Previous);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_short_swipe_springs_back() {
        let mut session = FlashcardSession::new();
        session.drag(-100.0);
        assert_eq!(session.release(3), SwipeOutcome::SpringBack);
        session.drag(40.0);
        assert_eq!(session.release(3), SwipeOutcome::SpringBack);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.drag_offset(), 0.0);
    }

    #[test]
    fn test_swipe_at_boundary_springs_back() {
        let mut session = FlashcardSession::new();
        session.drag(200.0);
        assert_eq!(session.release(3), SwipeOutcome::SpringBack);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut session = FlashcardSession::with_swipe_threshold(20.0);
        session.drag(-25.0);
        assert_eq!(session.release(3), SwipeOutcome::Next);
    }

    #[test]
    fn test_clamp_after_sequence_shrinks() {
        let mut session = FlashcardSession::new();
        session.next(5);
        session.next(5);
        session.next(5);
        session.toggle_answer();

        session.clamp_to(2);
        assert_eq!(session.current_index(), 1);
        assert!(!session.show_answer());

        session.clamp_to(0);
        assert_eq!(session.current_index(), 0);

        session.next(5);
        session.reset();
        assert_eq!(session.current_index(), 0);
    }
}
