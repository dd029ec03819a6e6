use crate::words::Word;

/// Kind of question asked about a word, in the order they are asked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionType {
    #[default]
    NativeMeaning,
    Definition,
    Example,
}

impl QuestionType {
    pub const ORDER: [QuestionType; 3] = [
        QuestionType::NativeMeaning,
        QuestionType::Definition,
        QuestionType::Example,
    ];

    pub fn index(self) -> usize {
        match self {
            QuestionType::NativeMeaning => 0,
            QuestionType::Definition => 1,
            QuestionType::Example => 2,
        }
    }

    /// The following question type, wrapping after the last one
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Field of `word` the answer is compared against
    pub fn expected(self, word: &Word) -> &str {
        match self {
            QuestionType::NativeMeaning => &word.native_meaning,
            QuestionType::Definition => &word.definition,
            QuestionType::Example => &word.example,
        }
    }

    pub fn prompt(self, word: &Word) -> String {
        match self {
            QuestionType::NativeMeaning => {
                format!("What is the Turkish meaning of \"{}\"?", word.term)
            }
            QuestionType::Definition => format!("What does \"{}\" mean?", word.term),
            QuestionType::Example => format!("Write an example sentence with \"{}\".", word.term),
        }
    }
}

/// Self-graded quiz about a single word
///
/// Answers compare case-insensitively. Whitespace is significant unless
/// trimming is switched on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSession {
    question: QuestionType,
    pub answer: String,
    show_result: bool,
    last_result: Option<bool>,
    trim_answers: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trimmed_answers(mut self, trim_answers: bool) -> Self {
        self.trim_answers = trim_answers;
        self
    }

    pub fn question(&self) -> QuestionType {
        self.question
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    /// Outcome of the last check, `None` before the first check of a question
    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    pub fn prompt(&self, word: &Word) -> String {
        self.question.prompt(word)
    }

    pub fn expected<'a>(&self, word: &'a Word) -> &'a str {
        self.question.expected(word)
    }

    /// Grade the current answer against `word` and reveal the result
    pub fn check_answer(&mut self, word: &Word) -> bool {
        let expected = self.question.expected(word);
        let correct = if self.trim_answers {
            eq_ignore_case(self.answer.trim(), expected.trim())
        } else {
            eq_ignore_case(&self.answer, expected)
        };

        self.show_result = true;
        self.last_result = Some(correct);
        correct
    }

    /// Clear the answer and move to the next question type
    pub fn next_question(&mut self) {
        self.answer.clear();
        self.show_result = false;
        self.last_result = None;
        self.question = self.question.next();
    }

    /// Start over for a different word
    pub fn restart(&mut self) {
        self.answer.clear();
        self.show_result = false;
        self.last_result = None;
        self.question = QuestionType::default();
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Level;

    fn apple() -> Word {
        Word::new(
            "Apple",
            "A round fruit with red, green or yellow skin",
            "Elma",
            "She eats an apple every morning.",
            Level::A1,
        )
    }

    #[test]
    fn test_question_cycle() {
        assert_eq!(QuestionType::default(), QuestionType::NativeMeaning);
        assert_eq!(QuestionType::NativeMeaning.next(), QuestionType::Definition);
        assert_eq!(QuestionType::Definition.next(), QuestionType::Example);
        assert_eq!(QuestionType::Example.next(), QuestionType::NativeMeaning);
    }

    #[test]
    fn test_apple_quiz_scenario() {
        let word = apple();
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.question().index(), 0);

        quiz.answer = "elma".to_string();
        assert!(quiz.check_answer(&word));
        assert!(quiz.show_result());

        quiz.next_question();
        assert_eq!(quiz.question().index(), 1);
        assert!(quiz.answer.is_empty());
        assert!(!quiz.show_result());

        quiz.answer = "Elma".to_string();
        assert!(!quiz.check_answer(&word));
        assert_eq!(quiz.last_result(), Some(false));
    }

    #[test]
    fn test_whitespace_is_significant_by_default() {
        let word = apple();
        let mut quiz = QuizSession::new();
        quiz.answer = " Elma ".to_string();
        assert!(!quiz.check_answer(&word));
    }

    #[test]
    fn test_trimmed_answers() {
        let word = apple();
        let mut quiz = QuizSession::new().with_trimmed_answers(true);
        quiz.answer = "  ELMA\n".to_string();
        assert!(quiz.check_answer(&word));
    }

    #[test]
    fn test_example_question_compares_sentence() {
        let word = apple();
        let mut quiz = QuizSession::new();
        quiz.next_question();
        quiz.next_question();
        assert_eq!(quiz.question(), QuestionType::Example);

        quiz.answer = "she eats an apple every morning.".to_string();
        assert!(quiz.check_answer(&word));
    }

    #[test]
    fn test_cursor_wraps_after_three_questions() {
        let mut quiz = QuizSession::new();
        for _ in 0..3 {
            quiz.next_question();
        }
        assert_eq!(quiz.question(), QuestionType::NativeMeaning);
    }

    #[test]
    fn test_restart_resets_cursor() {
        let mut quiz = QuizSession::new();
        quiz.next_question();
        quiz.answer = "x".to_string();
        quiz.restart();
        assert_eq!(quiz.question(), QuestionType::NativeMeaning);
        assert!(quiz.answer.is_empty());
        assert_eq!(quiz.last_result(), None);
    }

    #[test]
    fn test_prompt_mentions_term() {
        let word = apple();
        for question in QuestionType::ORDER {
            assert!(question.prompt(&word).contains("Apple"));
        }
        assert_eq!(QuestionType::Definition.expected(&word), word.definition);
    }
}
