//! Clock-face geometry.
//!
//! Everything here is a pure function of the time and fixed shape constants:
//! - `angle`: normalization, hand angles, polar placement
//! - `hands`: hour and minute hand polygons
//! - `labels`: hour label positions and the "IS" rotation

pub mod angle;
pub mod hands;
pub mod labels;

pub use angle::{degrees_to_radians, hour_angle, minute_angle, normalize_angle, polar_offset};
pub use hands::{HandShapeParams, HourHandVertices, MinuteHandVertices, hour_hand, minute_hand};
pub use labels::{hour_label_position, hour_label_positions, is_label_rotation, label_frame};
