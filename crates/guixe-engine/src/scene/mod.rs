//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one face update
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific payloads isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::Shadow;
pub use shapes::circle::CircleCmd;
pub use shapes::polygon::PolygonCmd;
pub use shapes::text::{TextCmd, TextRole};
pub use z_index::ZIndex;
