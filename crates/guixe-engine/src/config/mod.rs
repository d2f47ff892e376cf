//! Face configuration and the UI events that change it.
//!
//! The renderer owns a `ClockConfig`, applies `ClockEvent`s produced by its
//! widgets, and passes the config into every composition.

mod event;
mod layout;

pub use event::ClockEvent;
pub use layout::FaceLayout;

use std::sync::Arc;

use crate::error::ClockError;
use crate::geometry::HandShapeParams;
use crate::paint::{ColorTarget, Theme};
use crate::words::{WORD_COUNT, WordList};

/// Everything the face needs besides the time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub layout: FaceLayout,
    pub hands: HandShapeParams,
    pub theme: Theme,
    words: Arc<WordList>,
}

impl ClockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, words: WordList) -> Self {
        self.words = Arc::new(words);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_hands(mut self, hands: HandShapeParams) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_layout(mut self, layout: FaceLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Current word list snapshot. Later edits never mutate it.
    #[inline]
    pub fn words(&self) -> Arc<WordList> {
        Arc::clone(&self.words)
    }

    /// Applies a UI event. Returns `true` when the face needs a redraw.
    pub fn apply(&mut self, event: ClockEvent) -> Result<bool, ClockError> {
        match event {
            ClockEvent::ReplaceWord { index, word } => {
                let word = word.trim().to_uppercase();
                if word.is_empty() {
                    log::debug!("ignoring empty word for slot {index}");
                    return Ok(false);
                }
                if index < WORD_COUNT && self.words.get(index) == word {
                    return Ok(false);
                }

                let next = self.words.with_word(index, word)?;
                log::info!("word {index} is now {:?}", next.get(index));
                self.words = Arc::new(next);
                Ok(true)
            }
            ClockEvent::SetColor { target, color } => {
                if self.theme.color(target) == color {
                    return Ok(false);
                }

                self.theme.set_color(target, color);
                log::info!("{} color is now #{:06x}", target_name(target), color.to_rgb_hex());
                Ok(true)
            }
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            layout: FaceLayout::default(),
            hands: HandShapeParams::default(),
            theme: Theme::default(),
            words: Arc::new(WordList::default()),
        }
    }
}

fn target_name(target: ColorTarget) -> &'static str {
    match target {
        ColorTarget::Background => "background",
        ColorTarget::Clock => "clock",
        ColorTarget::Hands => "hands",
    }
}
