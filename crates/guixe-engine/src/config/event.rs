use crate::paint::{Color, ColorTarget};

/// Input produced by the renderer's widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockEvent {
    /// A label was edited. The word is trimmed and upper-cased; an empty
    /// word leaves the slot unchanged.
    ReplaceWord { index: usize, word: String },
    /// A color picker settled on a new color.
    SetColor { target: ColorTarget, color: Color },
}

impl ClockEvent {
    #[inline]
    pub fn replace_word(index: usize, word: impl Into<String>) -> Self {
        ClockEvent::ReplaceWord { index, word: word.into() }
    }
}
