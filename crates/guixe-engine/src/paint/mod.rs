//! Colors shared between the clock face and renderers.
//!
//! Scope:
//! - color representation (straight-alpha sRGB)
//! - the four face colors and the text contrast rule
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod theme;

pub use color::Color;
pub use theme::{ColorTarget, Theme};
