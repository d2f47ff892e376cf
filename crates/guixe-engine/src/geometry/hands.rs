//! Hour and minute hand polygons.
//!
//! Each hand is a symmetric arrow template in local `(along, across)`
//! coordinates: `along` runs from the clock center towards the tip, `across`
//! is perpendicular to it, negative on the counter-clockwise ("top") side.
//! The template is rotated by the hand angle and translated to the center.

use crate::coords::Point2D;

use super::angle::{hour_angle, minute_angle, polar_offset};

/// Arrow proportions, in canvas points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandShapeParams {
    /// Shaft half-width, shared by both hands.
    pub h: f64,
    /// Hour hand length (center to tip).
    pub l1: f64,
    /// Hour hand tail length and distance of its flare from center.
    pub d: f64,
    /// Hour hand flare half-width.
    pub k1: f64,
    /// Minute hand length (center to tip).
    pub l2: f64,
    /// Minute hand head half-width and head length.
    pub k2: f64,
}

impl Default for HandShapeParams {
    fn default() -> Self {
        Self { h: 15.0, l1: 170.0, d: 25.0, k1: 45.0, l2: 245.0, k2: 15.0 }
    }
}

/// Named vertices of the hour hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HourHandVertices {
    pub back_top: Point2D,
    pub back_bottom: Point2D,
    pub center_bottom: Point2D,
    pub lower: Point2D,
    pub tip: Point2D,
    pub upper: Point2D,
    pub center_top: Point2D,
}

impl HourHandVertices {
    /// Vertices in fill order. The path closes from `center_top` to `back_top`.
    pub fn polygon(&self) -> Vec<Point2D> {
        vec![
            self.back_top,
            self.back_bottom,
            self.center_bottom,
            self.lower,
            self.tip,
            self.upper,
            self.center_top,
        ]
    }
}

/// Named vertices of the minute hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MinuteHandVertices {
    pub back_top: Point2D,
    pub upper: Point2D,
    pub inner: Point2D,
    pub lower: Point2D,
    pub back_bottom: Point2D,
}

impl MinuteHandVertices {
    /// Vertices in fill order. The path closes from `back_bottom` to `back_top`.
    pub fn polygon(&self) -> Vec<Point2D> {
        vec![self.back_top, self.upper, self.inner, self.lower, self.back_bottom]
    }
}

/// Maps a template point to canvas coordinates for a hand at `angle` degrees.
#[inline]
fn place(center: Point2D, angle: f64, along: f64, across: f64) -> Point2D {
    polar_offset(polar_offset(center, along, angle), across, angle + 90.0)
}

/// Hour hand: a tail of half-width `h` behind the center, flaring to `k1`
/// at distance `d`, then tapering to the tip at `l1`.
pub fn hour_hand(center: Point2D, hr: f64, min: f64, p: &HandShapeParams) -> HourHandVertices {
    let a = hour_angle(hr, min) as f64;
    let at = |along: f64, across: f64| place(center, a, along, across);

    HourHandVertices {
        back_top: at(-p.d, -p.h),
        back_bottom: at(-p.d, p.h),
        center_bottom: at(0.0, p.h),
        lower: at(p.d, p.k1),
        tip: at(p.l1, 0.0),
        upper: at(p.d, -p.k1),
        center_top: at(0.0, -p.h),
    }
}

/// Minute hand: a straight shaft from `h` behind the center to a head of
/// half-width `k2` that closes to the tip at `l2`.
pub fn minute_hand(center: Point2D, min: f64, p: &HandShapeParams) -> MinuteHandVertices {
    let a = minute_angle(min) as f64;
    let at = |along: f64, across: f64| place(center, a, along, across);

    MinuteHandVertices {
        back_top: at(-p.h, -p.h),
        upper: at(p.l2 - p.k2, -p.k2),
        inner: at(p.l2, 0.0),
        lower: at(p.l2 - p.k2, p.k2),
        back_bottom: at(-p.h, p.h),
    }
}
