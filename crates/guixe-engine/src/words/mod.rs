//! Word list and the time-to-sentence mapping.

mod list;
mod sentence;

pub use list::{WORD_COUNT, WordList};
pub use sentence::{Sentence, first_word_index, second_word_index, select_sentence};
