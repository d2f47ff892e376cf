use std::fmt;

use crate::error::ClockError;

/// One word per hour position.
pub const WORD_COUNT: usize = 12;

const DEFAULT_WORDS: [&str; WORD_COUNT] = [
    "WORK", "BELIEF", "DESIRE", "DESIGN", "EMOTION", "TECH",
    "APPLE", "FOOD", "LIFE", "PANIC", "LOVE", "DREAM",
];

/// The twelve clock words. Index `h - 1` belongs to hour `h`.
///
/// Immutable once built: edits produce a new list (see [`WordList::with_word`]),
/// so a snapshot handed to a frame never changes underneath it.
#[derive(Clone, PartialEq, Eq)]
pub struct WordList {
    words: [String; WORD_COUNT],
}

impl WordList {
    /// Builds a list from exactly twelve non-blank words.
    pub fn new<I, S>(words: I) -> Result<Self, ClockError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let len = words.len();
        let words: [String; WORD_COUNT] = words
            .try_into()
            .map_err(|_| ClockError::InvalidWordList { len })?;
        if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(ClockError::EmptyWord { index });
        }
        Ok(Self { words })
    }

    /// Word at `index`, reduced modulo 12.
    #[inline]
    pub fn get(&self, index: usize) -> &str {
        &self.words[index % WORD_COUNT]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Copy of this list with slot `index` replaced.
    pub fn with_word(&self, index: usize, word: impl Into<String>) -> Result<Self, ClockError> {
        if index >= WORD_COUNT {
            return Err(ClockError::WordIndexOutOfRange { index });
        }
        let word = word.into();
        if word.trim().is_empty() {
            return Err(ClockError::EmptyWord { index });
        }
        let mut next = self.clone();
        next.words[index] = word;
        Ok(next)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self { words: DEFAULT_WORDS.map(String::from) }
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            WordList::new(["A", "B", "C"]).unwrap_err(),
            ClockError::InvalidWordList { len: 3 }
        );
        let thirteen = (0..13).map(|i| i.to_string());
        assert_eq!(
            WordList::new(thirteen).unwrap_err(),
            ClockError::InvalidWordList { len: 13 }
        );
    }

    #[test]
    fn rejects_blank_words() {
        let mut words: Vec<&str> = DEFAULT_WORDS.to_vec();
        words[11] = "   ";
        assert_eq!(WordList::new(words).unwrap_err(), ClockError::EmptyWord { index: 11 });

        let mut words: Vec<&str> = DEFAULT_WORDS.to_vec();
        words[0] = "";
        assert_eq!(WordList::new(words).unwrap_err(), ClockError::EmptyWord { index: 0 });
    }

    #[test]
    fn lookups_wrap_modulo_twelve() {
        let words = WordList::default();
        assert_eq!(words.get(0), "WORK");
        assert_eq!(words.get(11), "DREAM");
        assert_eq!(words.get(12), "WORK");
        assert_eq!(words.get(23), "DREAM");
    }

    #[test]
    fn with_word_leaves_original_untouched() {
        let words = WordList::default();
        let edited = words.with_word(4, "JOY").unwrap();
        assert_eq!(words.get(4), "EMOTION");
        assert_eq!(edited.get(4), "JOY");
        assert_eq!(edited.iter().count(), WORD_COUNT);
    }

    #[test]
    fn with_word_rejects_bad_index() {
        assert_eq!(
            WordList::default().with_word(12, "X").unwrap_err(),
            ClockError::WordIndexOutOfRange { index: 12 }
        );
    }

    #[test]
    fn with_word_rejects_blank_word() {
        assert_eq!(
            WordList::default().with_word(3, " \t").unwrap_err(),
            ClockError::EmptyWord { index: 3 }
        );
    }
}
