use crate::storage::KeyValueStore;
use crate::words::{Level, Word, WordFilter, WordId};

use super::persistence::{self, PersistenceError};

/// View-model shared by every Lexicard view
///
/// Holds the catalog, the selected level and the personal dictionary. A word
/// in the personal dictionary is a snapshot of its catalog entry; both copies
/// carry the same flags after every mutation.
pub struct WordStore<S: KeyValueStore> {
    catalog: Vec<Word>,
    selected_level: Level,
    personal_dictionary: Vec<Word>,
    backend: S,
    last_save_error: Option<PersistenceError>,
}

impl<S: KeyValueStore> WordStore<S> {
    /// Build a store over `catalog`, restoring the personal dictionary from
    /// `backend` and reconciling catalog flags with it
    pub fn load(mut catalog: Vec<Word>, backend: S) -> Self {
        let mut personal_dictionary: Vec<Word> = Vec::new();
        for mut saved in persistence::load_personal_dictionary(&backend) {
            if personal_dictionary.iter().any(|w| w.id() == saved.id()) {
                log::debug!("Skipping duplicate personal dictionary entry {}", saved.id());
                continue;
            }
            saved.is_in_personal_dictionary = true;
            personal_dictionary.push(saved);
        }

        let mut matched = 0;
        for saved in &personal_dictionary {
            if let Some(entry) = catalog.iter_mut().find(|w| w.id() == saved.id()) {
                entry.copy_flags_from(saved);
                matched += 1;
            }
        }

        log::info!(
            "Loaded {} catalog words, {} personal dictionary entries ({} not in catalog)",
            catalog.len(),
            personal_dictionary.len(),
            personal_dictionary.len() - matched
        );

        Self {
            catalog,
            selected_level: Level::All,
            personal_dictionary,
            backend,
            last_save_error: None,
        }
    }

    // ==================== Reads ====================

    pub fn catalog(&self) -> &[Word] {
        &self.catalog
    }

    pub fn personal_dictionary(&self) -> &[Word] {
        &self.personal_dictionary
    }

    /// Catalog entry for `id`, falling back to a personal dictionary entry
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.catalog
            .iter()
            .chain(self.personal_dictionary.iter())
            .find(|w| w.id() == id)
    }

    pub fn is_in_catalog(&self, id: WordId) -> bool {
        self.catalog.iter().any(|w| w.id() == id)
    }

    pub fn selected_level(&self) -> Level {
        self.selected_level
    }

    pub fn set_selected_level(&mut self, level: Level) {
        self.selected_level = level;
    }

    pub fn filtered_catalog(&self, filter: &WordFilter) -> Vec<&Word> {
        filter.apply(&self.catalog)
    }

    pub fn filtered_personal_dictionary(&self, filter: &WordFilter) -> Vec<&Word> {
        filter.apply(&self.personal_dictionary)
    }

    /// Catalog words at the selected level, with no other filter applied
    pub fn level_words(&self) -> Vec<&Word> {
        WordFilter::new()
            .level(self.selected_level)
            .apply(&self.catalog)
    }

    /// Error from the most recent save, cleared by the next successful one
    pub fn last_save_error(&self) -> Option<&PersistenceError> {
        self.last_save_error.as_ref()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    // ==================== Mutations ====================

    /// Flip the favorite flag on both copies of a word
    ///
    /// Unknown ids are ignored. Only the personal dictionary is persisted, so
    /// a save happens only when the word is in it.
    pub fn toggle_favorite(&mut self, id: WordId) {
        if let Some(entry) = self.catalog.iter_mut().find(|w| w.id() == id) {
            entry.is_favorite = !entry.is_favorite;
        }

        let mut in_dictionary = false;
        if let Some(saved) = self.personal_dictionary.iter_mut().find(|w| w.id() == id) {
            saved.is_favorite = !saved.is_favorite;
            in_dictionary = true;
        }

        if in_dictionary {
            self.persist();
        }
    }

    /// Add a catalog word to the personal dictionary, or remove it
    ///
    /// Ids not in the catalog are ignored.
    pub fn toggle_personal_dictionary(&mut self, id: WordId) {
        let Some(entry) = self.catalog.iter_mut().find(|w| w.id() == id) else {
            return;
        };

        entry.is_in_personal_dictionary = !entry.is_in_personal_dictionary;

        if entry.is_in_personal_dictionary {
            let snapshot = entry.clone();
            match self.personal_dictionary.iter_mut().find(|w| w.id() == id) {
                Some(existing) => *existing = snapshot,
                None => self.personal_dictionary.push(snapshot),
            }
        } else {
            self.personal_dictionary.retain(|w| w.id() != id);
        }

        self.persist();
    }

    /// Remove an entry from the personal dictionary by id
    ///
    /// Works for entries whose word is no longer in the catalog. Returns
    /// whether anything was removed.
    pub fn remove_from_personal_dictionary(&mut self, id: WordId) -> bool {
        let before = self.personal_dictionary.len();
        self.personal_dictionary.retain(|w| w.id() != id);
        if self.personal_dictionary.len() == before {
            return false;
        }

        if let Some(entry) = self.catalog.iter_mut().find(|w| w.id() == id) {
            entry.is_in_personal_dictionary = false;
        }

        self.persist();
        true
    }

    fn persist(&mut self) {
        match persistence::save_personal_dictionary(&mut self.backend, &self.personal_dictionary) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                log::warn!("Failed to save personal dictionary: {}", e);
                self.last_save_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{self, MemoryKeyValueStore, StorageError};
    use crate::store::persistence::PERSONAL_DICTIONARY_KEY;

    fn catalog() -> Vec<Word> {
        vec![
            Word::new("Apple", "A round fruit", "Elma", "I eat an apple.", Level::A1),
            Word::new("Book", "Printed pages", "Kitap", "I read a book.", Level::A1),
            Word::new("Journey", "Travel", "Yolculuk", "A long journey.", Level::A2),
        ]
    }

    fn new_store() -> WordStore<MemoryKeyValueStore> {
        WordStore::load(catalog(), MemoryKeyValueStore::new())
    }

    fn id_of(term: &str) -> WordId {
        WordId::from_term(term)
    }

    fn terms(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.term.clone()).collect()
    }

    /// Every personal dictionary entry is flagged and matches its catalog copy
    fn assert_in_sync<S: KeyValueStore>(store: &WordStore<S>) {
        for saved in store.personal_dictionary() {
            assert!(saved.is_in_personal_dictionary);
            if let Some(entry) = store.catalog().iter().find(|w| w.id() == saved.id()) {
                assert!(entry.flags_match(saved), "flags diverged for {}", saved.term);
            }
        }
        for entry in store.catalog() {
            let count = store
                .personal_dictionary()
                .iter()
                .filter(|w| w.id() == entry.id())
                .count();
            assert_eq!(count, usize::from(entry.is_in_personal_dictionary));
        }
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> storage::Result<Option<Vec<u8>>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> storage::Result<()> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> storage::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_store_defaults() {
        let store = new_store();
        assert_eq!(store.selected_level(), Level::All);
        assert_eq!(store.catalog().len(), 3);
        assert!(store.personal_dictionary().is_empty());
        assert!(store.last_save_error().is_none());
    }

    #[test]
    fn test_toggle_favorite_parity() {
        for n in 0..6 {
            let mut store = new_store();
            for _ in 0..n {
                store.toggle_favorite(id_of("Book"));
            }
            let book = store.word(id_of("Book")).unwrap();
            assert_eq!(book.is_favorite, n % 2 == 1);
        }
    }

    #[test]
    fn test_toggle_favorite_unknown_id_is_noop() {
        let mut store = new_store();
        store.toggle_favorite(WordId::new());
        assert!(store.catalog().iter().all(|w| !w.is_favorite));
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_toggle_favorite_outside_dictionary_does_not_persist() {
        let mut store = new_store();
        store.toggle_favorite(id_of("Apple"));
        assert!(store.backend().get(PERSONAL_DICTIONARY_KEY).unwrap().is_none());
    }

    #[test]
    fn test_toggle_favorite_syncs_dictionary_copy() {
        let mut store = new_store();
        store.toggle_personal_dictionary(id_of("Apple"));
        store.toggle_favorite(id_of("Apple"));

        assert!(store.personal_dictionary()[0].is_favorite);
        assert!(store.word(id_of("Apple")).unwrap().is_favorite);
        assert_in_sync(&store);

        store.toggle_favorite(id_of("Apple"));
        assert!(!store.personal_dictionary()[0].is_favorite);
        assert_in_sync(&store);
    }

    #[test]
    fn test_toggle_personal_dictionary_twice_leaves_no_trace() {
        let mut store = new_store();
        store.toggle_personal_dictionary(id_of("Book"));
        assert_eq!(store.personal_dictionary().len(), 1);
        assert_in_sync(&store);

        store.toggle_personal_dictionary(id_of("Book"));
        assert!(store.personal_dictionary().is_empty());
        assert!(!store.word(id_of("Book")).unwrap().is_in_personal_dictionary);
        assert_in_sync(&store);
    }

    #[test]
    fn test_toggle_personal_dictionary_unknown_id_is_noop() {
        let mut store = new_store();
        store.toggle_personal_dictionary(WordId::new());
        assert!(store.personal_dictionary().is_empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_personal_dictionary_keeps_insertion_order() {
        let mut store = new_store();
        store.toggle_personal_dictionary(id_of("Journey"));
        store.toggle_personal_dictionary(id_of("Apple"));

        let dict: Vec<&Word> = store.personal_dictionary().iter().collect();
        assert_eq!(terms(&dict), vec!["Journey", "Apple"]);
    }

    #[test]
    fn test_apple_book_scenario() {
        let mut store = new_store();

        store.toggle_favorite(id_of("Apple"));
        let favorites = store.filtered_catalog(&WordFilter::new().favorites_only(true));
        assert_eq!(terms(&favorites), vec!["Apple"]);

        store.toggle_personal_dictionary(id_of("Apple"));
        let dict = store.personal_dictionary();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict[0].term, "Apple");
        assert!(dict[0].is_favorite);
        assert!(dict[0].is_in_personal_dictionary);

        let reloaded = WordStore::load(catalog(), store.into_backend());
        let apple = reloaded.word(id_of("Apple")).unwrap();
        assert!(apple.is_favorite);
        assert!(apple.is_in_personal_dictionary);

        let book = reloaded.word(id_of("Book")).unwrap();
        assert!(!book.is_favorite);
        assert!(!book.is_in_personal_dictionary);
        assert_in_sync(&reloaded);
    }

    #[test]
    fn test_reload_reconciles_flags_for_every_saved_word() {
        let mut store = new_store();
        store.toggle_personal_dictionary(id_of("Apple"));
        store.toggle_personal_dictionary(id_of("Journey"));
        store.toggle_favorite(id_of("Journey"));

        let saved: Vec<Word> = store.personal_dictionary().to_vec();
        let reloaded = WordStore::load(catalog(), store.into_backend());

        for word in &saved {
            let entry = reloaded.catalog().iter().find(|w| w.id() == word.id()).unwrap();
            assert!(entry.flags_match(word));
        }
        assert_eq!(reloaded.personal_dictionary(), saved.as_slice());
    }

    #[test]
    fn test_load_corrupt_blob_yields_empty_dictionary() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set(PERSONAL_DICTIONARY_KEY, b"\x00\x01garbage").unwrap();

        let store = WordStore::load(catalog(), backend);
        assert!(store.personal_dictionary().is_empty());
        assert!(store.catalog().iter().all(|w| !w.is_in_personal_dictionary));
    }

    #[test]
    fn test_load_keeps_orphans_and_collapses_duplicates() {
        let mut orphan = Word::with_id(WordId::new(), "Gone", "", "", "", Level::B2);
        orphan.is_in_personal_dictionary = true;
        let mut apple = catalog()[0].clone();
        apple.is_in_personal_dictionary = true;

        let mut backend = MemoryKeyValueStore::new();
        let blob = persistence::encode(&[apple.clone(), orphan.clone(), apple]).unwrap();
        backend.set(PERSONAL_DICTIONARY_KEY, &blob).unwrap();

        let mut store = WordStore::load(catalog(), backend);
        assert_eq!(store.personal_dictionary().len(), 2);
        assert!(!store.is_in_catalog(orphan.id()));
        assert_eq!(store.word(orphan.id()).unwrap().term, "Gone");
        assert_in_sync(&store);

        // Catalog toggles cannot reach an orphan, removal by id can
        store.toggle_personal_dictionary(orphan.id());
        assert_eq!(store.personal_dictionary().len(), 2);
        assert!(store.remove_from_personal_dictionary(orphan.id()));
        assert!(!store.remove_from_personal_dictionary(orphan.id()));
        assert_eq!(store.personal_dictionary().len(), 1);
    }

    #[test]
    fn test_loaded_entries_are_flagged() {
        let apple = catalog()[0].clone();
        let mut backend = MemoryKeyValueStore::new();
        backend
            .set(PERSONAL_DICTIONARY_KEY, &persistence::encode(&[apple]).unwrap())
            .unwrap();

        let store = WordStore::load(catalog(), backend);
        assert!(store.word(id_of("Apple")).unwrap().is_in_personal_dictionary);
        assert_in_sync(&store);
    }

    #[test]
    fn test_remove_from_personal_dictionary_clears_catalog_flag() {
        let mut store = new_store();
        store.toggle_personal_dictionary(id_of("Book"));
        assert!(store.remove_from_personal_dictionary(id_of("Book")));
        assert!(!store.word(id_of("Book")).unwrap().is_in_personal_dictionary);
        assert_in_sync(&store);
    }

    #[test]
    fn test_save_failure_is_recorded_not_fatal() {
        let mut store = WordStore::load(catalog(), FailingStore);
        store.toggle_personal_dictionary(id_of("Apple"));

        assert!(store.word(id_of("Apple")).unwrap().is_in_personal_dictionary);
        assert_eq!(store.personal_dictionary().len(), 1);
        assert!(matches!(
            store.last_save_error(),
            Some(PersistenceError::Storage(StorageError::Io(_)))
        ));
    }

    #[test]
    fn test_successful_save_clears_error() {
        let mut store = new_store();
        store.last_save_error = Some(PersistenceError::Storage(StorageError::DataDirNotFound));
        store.toggle_personal_dictionary(id_of("Apple"));
        assert!(store.last_save_error().is_none());
    }

    #[test]
    fn test_level_words_ignores_favorites_and_search() {
        let mut store = new_store();
        store.toggle_favorite(id_of("Apple"));
        store.set_selected_level(Level::A1);
        assert_eq!(terms(&store.level_words()), vec!["Apple", "Book"]);

        store.set_selected_level(Level::C2);
        assert!(store.level_words().is_empty());

        store.set_selected_level(Level::All);
        assert_eq!(store.level_words().len(), 3);
    }

    #[test]
    fn test_filtered_views_reflect_current_flags() {
        let mut store = new_store();
        let filter = WordFilter::new().favorites_only(true);
        assert!(store.filtered_catalog(&filter).is_empty());

        store.toggle_personal_dictionary(id_of("Book"));
        store.toggle_favorite(id_of("Book"));
        assert_eq!(terms(&store.filtered_catalog(&filter)), vec!["Book"]);
        assert_eq!(terms(&store.filtered_personal_dictionary(&filter)), vec!["Book"]);

        store.toggle_favorite(id_of("Book"));
        assert!(store.filtered_personal_dictionary(&filter).is_empty());
    }
}
