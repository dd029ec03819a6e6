//! Built-in word catalog
//!
//! The catalog is fixed at startup. Ids come from `WordId::from_term`, so a
//! word saved to the personal dictionary finds its catalog entry again on the
//! next launch.

use super::models::{Level, Word};

/// (term, definition, Turkish meaning, example sentence, level)
const SEED: &[(&str, &str, &str, &str, Level)] = &[
    (
        "Apple",
        "A round fruit with red, green or yellow skin",
        "Elma",
        "She eats an apple every morning.",
        Level::A1,
    ),
    (
        "Book",
        "A set of printed pages bound together",
        "Kitap",
        "I am reading a book about history.",
        Level::A1,
    ),
    (
        "Water",
        "A clear liquid that falls as rain",
        "Su",
        "Please drink more water.",
        Level::A1,
    ),
    (
        "Journey",
        "An act of travelling from one place to another",
        "Yolculuk",
        "The journey took six hours.",
        Level::A2,
    ),
    (
        "Borrow",
        "To take something with the promise to return it",
        "Ödünç almak",
        "Can I borrow your pen?",
        Level::A2,
    ),
    (
        "Neighbour",
        "A person who lives next to you",
        "Komşu",
        "Our neighbour has a friendly dog.",
        Level::A2,
    ),
    (
        "Achieve",
        "To succeed in doing something after effort",
        "Başarmak",
        "She achieved her goal of running a marathon.",
        Level::B1,
    ),
    (
        "Curious",
        "Eager to know or learn something",
        "Meraklı",
        "Children are naturally curious.",
        Level::B1,
    ),
    (
        "Improve",
        "To make or become better",
        "Geliştirmek",
        "Practice will improve your English.",
        Level::B1,
    ),
    (
        "Reluctant",
        "Unwilling and hesitant",
        "İsteksiz",
        "He was reluctant to leave the party.",
        Level::B2,
    ),
    (
        "Significant",
        "Important enough to be noticed",
        "Önemli",
        "There was a significant change in the weather.",
        Level::B2,
    ),
    (
        "Thorough",
        "Complete and careful about every detail",
        "Titiz",
        "The doctor gave him a thorough examination.",
        Level::B2,
    ),
    (
        "Ambiguous",
        "Open to more than one interpretation",
        "Belirsiz",
        "The ending of the film was ambiguous.",
        Level::C1,
    ),
    (
        "Meticulous",
        "Showing great attention to detail",
        "Titizlikle",
        "He kept meticulous records of his spending.",
        Level::C1,
    ),
    (
        "Resilient",
        "Able to recover quickly from difficulties",
        "Dayanıklı",
        "The community proved resilient after the flood.",
        Level::C1,
    ),
    (
        "Ubiquitous",
        "Present or found everywhere",
        "Her yerde bulunan",
        "Smartphones have become ubiquitous.",
        Level::C2,
    ),
    (
        "Ephemeral",
        "Lasting for a very short time",
        "Geçici",
        "Fame on social media is often ephemeral.",
        Level::C2,
    ),
    (
        "Serendipity",
        "Finding something good without looking for it",
        "Mutlu tesadüf",
        "Meeting her there was pure serendipity.",
        Level::C2,
    ),
];

/// The fixed word list every store starts from
pub fn seed() -> Vec<Word> {
    SEED.iter()
        .map(|&(term, definition, meaning, example, level)| {
            Word::new(term, definition, meaning, example, level)
        })
        .collect()
}
