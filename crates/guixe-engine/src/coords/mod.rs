//! Coordinate types for the clock canvas.
//!
//! Canonical space:
//! - The fixed 768 x 950 canvas of the clock view
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles elsewhere in the engine are measured clockwise from 12 o'clock,
//! which matches this orientation.

mod point;
mod rect;

pub use point::Point2D;
pub use rect::Rect;
