use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// What a text item is, so renderers can attach behavior (e.g. make hour
/// labels tappable).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextRole {
    Sentence,
    /// The center "IS" glyph.
    Is,
    /// Hour label holding word slot `.0`.
    HourLabel(usize),
}

/// Centered text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub role: TextRole,
    /// Font size in canvas points.
    pub size: f32,
    pub color: Color,
    /// Box the text is centered in.
    pub frame: Rect,
    /// Clockwise rotation about the frame center, degrees in [0, 360).
    pub rotation: i64,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        role: TextRole,
        size: f32,
        color: Color,
        frame: Rect,
        rotation: i64,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            role,
            size,
            color,
            frame,
            rotation,
        }));
    }
}
