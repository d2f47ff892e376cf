use std::fmt;

use super::list::{WORD_COUNT, WordList};

const SLOTS: i64 = WORD_COUNT as i64;

/// A selected "WORD1 IS WORD2" sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Slot nearest the minute hand.
    pub first_index: usize,
    /// Slot of the hour hand.
    pub second_index: usize,
    pub first: String,
    pub second: String,
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IS {}", self.first, self.second)
    }
}

/// Slot of the five-minute mark nearest `minute`. Minute 0 lands on the
/// twelve o'clock slot (11), minute 5 on slot 0.
#[inline]
pub fn first_word_index(minute: i64) -> usize {
    let mark = (minute as f64 / 5.0).round() as i64;
    (mark - 1).rem_euclid(SLOTS) as usize
}

/// Slot of the hour word. Up to and including minute 30 the hour hand
/// belongs to `hour`; after that it has advanced to the next hour.
///
/// `hour` may be on a 12- or 24-hour clock.
#[inline]
pub fn second_word_index(hour: i64, minute: i64) -> usize {
    let base = hour - 1;
    let index = if minute <= 30 { base } else { base + 1 };
    index.rem_euclid(SLOTS) as usize
}

/// Builds the sentence for a whole `hour` and `minute`.
pub fn select_sentence(words: &WordList, hour: i64, minute: i64) -> Sentence {
    let first_index = first_word_index(minute);
    let second_index = second_word_index(hour, minute);

    Sentence {
        first_index,
        second_index,
        first: words.get(first_index).to_owned(),
        second: words.get(second_index).to_owned(),
    }
}
