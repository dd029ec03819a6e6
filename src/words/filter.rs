//! Level, favorite and search filtering over word sequences

use super::models::{Level, Word};

/// Predicate used by every list view
///
/// Filtering keeps source order and is recomputed on each read, so the result
/// always reflects current flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFilter {
    pub level: Level,
    pub favorites_only: bool,
    pub query: String,
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn matches(&self, word: &Word) -> bool {
        self.matches_with_query(word, &self.query.to_lowercase())
    }

    fn matches_with_query(&self, word: &Word, query_lower: &str) -> bool {
        (self.level == Level::All || word.level == self.level)
            && (!self.favorites_only || word.is_favorite)
            && (query_lower.is_empty() || word.term.to_lowercase().contains(query_lower))
    }

    /// Stable filter over any sequence of word references
    pub fn apply<'a, I>(&self, words: I) -> Vec<&'a Word>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let query_lower = self.query.to_lowercase();
        words
            .into_iter()
            .filter(|w| self.matches_with_query(w, &query_lower))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<Word> {
        let mut apple = Word::new("Apple", "fruit", "Elma", "", Level::A1);
        apple.is_favorite = true;
        let book = Word::new("Book", "pages", "Kitap", "", Level::A1);
        let pineapple = Word::new("Pineapple", "tropical fruit", "Ananas", "", Level::B1);
        let journey = Word::new("Journey", "travel", "Yolculuk", "", Level::A2);
        vec![apple, book, pineapple, journey]
    }

    fn terms(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.term.clone()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let words = words();
        let result = WordFilter::new().apply(&words);
        assert_eq!(terms(&result), vec!["Apple", "Book", "Pineapple", "Journey"]);
    }

    #[test]
    fn test_level_filter() {
        let words = words();
        let result = WordFilter::new().level(Level::A1).apply(&words);
        assert_eq!(terms(&result), vec!["Apple", "Book"]);
    }

    #[test]
    fn test_favorites_only() {
        let words = words();
        let result = WordFilter::new().favorites_only(true).apply(&words);
        assert_eq!(terms(&result), vec!["Apple"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let words = words();
        let result = WordFilter::new().query("APPLE").apply(&words);
        assert_eq!(terms(&result), vec!["Apple", "Pineapple"]);

        let result = WordFilter::new().query("oUr").apply(&words);
        assert_eq!(terms(&result), vec!["Journey"]);
    }

    #[test]
    fn test_query_only_searches_term() {
        let words = words();
        let result = WordFilter::new().query("fruit").apply(&words);
        assert!(result.is_empty());
    }

    #[test]
    fn test_combined_predicates() {
        let words = words();
        let filter = WordFilter::new().level(Level::A1).favorites_only(true).query("app");
        assert_eq!(terms(&filter.apply(&words)), vec!["Apple"]);

        let filter = WordFilter::new().level(Level::B1).favorites_only(true);
        assert!(filter.apply(&words).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let words = words();
        let filter = WordFilter::new().level(Level::A1).query("o");
        let once = filter.apply(&words);
        let twice = filter.apply(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let words = words();
        let filter = WordFilter::new().query("book");
        let applied = filter.apply(&words);
        let matched: Vec<&Word> = words.iter().filter(|w| filter.matches(w)).collect();
        assert_eq!(applied, matched);
    }
}
