//! Angle arithmetic.
//!
//! Angles are whole degrees measured clockwise from 12 o'clock. With +Y
//! pointing down, direction `a` is the unit vector `(sin a, -cos a)`.

use crate::coords::Point2D;

/// Wraps `degrees` into `[0, 360)`, including negative input.
#[inline]
pub fn normalize_angle(degrees: i64) -> i64 {
    degrees.rem_euclid(360)
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * core::f64::consts::PI / 180.0
}

/// Hour hand angle: 30 degrees per hour plus half a degree per minute.
///
/// `hr` may be on a 12- or 24-hour clock; both normalize to the same angle.
#[inline]
pub fn hour_angle(hr: f64, min: f64) -> i64 {
    debug_assert!(hr.is_finite() && min.is_finite(), "non-finite time {hr}:{min}");
    normalize_angle((hr * 30.0 + min / 2.0).round() as i64)
}

/// Minute hand angle: 6 degrees per minute.
#[inline]
pub fn minute_angle(min: f64) -> i64 {
    debug_assert!(min.is_finite(), "non-finite minute {min}");
    normalize_angle((min * 6.0).round() as i64)
}

/// Point at `radius` from `center` in direction `degrees`.
#[inline]
pub fn polar_offset(center: Point2D, radius: f64, degrees: f64) -> Point2D {
    let (sin, cos) = degrees_to_radians(degrees).sin_cos();
    Point2D::new(center.x + radius * sin, center.y - radius * cos)
}
