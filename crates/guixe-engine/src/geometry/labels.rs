//! Hour label placement around the face and the rotation of the center "IS".

use crate::coords::{Point2D, Rect};

use super::angle::{hour_angle, polar_offset};

/// Offset of a label's frame from its anchor point.
pub const LABEL_FRAME_OFFSET: Point2D = Point2D::new(-25.0, -25.0);
/// Size of a label's frame.
pub const LABEL_FRAME_SIZE: Point2D = Point2D::new(100.0, 50.0);

/// Anchor of the label for `hour` (1..=12), with 12 at the top.
pub fn hour_label_position(hour: u32, center_x: f64, center_y: f64, radius: f64) -> Point2D {
    debug_assert!((1..=12).contains(&hour), "hour label {hour} outside 1..=12");
    polar_offset(Point2D::new(center_x, center_y), radius, f64::from(hour % 12) * 30.0)
}

/// Anchors for all twelve labels. Index `i` holds hour `i + 1`, matching
/// the word list.
pub fn hour_label_positions(center: Point2D, radius: f64) -> [Point2D; 12] {
    core::array::from_fn(|i| hour_label_position(i as u32 + 1, center.x, center.y, radius))
}

/// Tap/draw frame of a label anchored at `position`.
#[inline]
pub fn label_frame(position: Point2D) -> Rect {
    Rect::from_origin_size(position + LABEL_FRAME_OFFSET, LABEL_FRAME_SIZE)
}

/// Rotation of the center "IS" glyph, locked to the hour hand.
#[inline]
pub fn is_label_rotation(hr: f64, min: f64) -> i64 {
    hour_angle(hr, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2D, b: Point2D) -> bool {
        a.distance_to(b) < 1e-9
    }

    #[test]
    fn twelve_is_at_the_top() {
        let p = hour_label_position(12, 384.0, 300.0, 250.0);
        assert!(close(p, Point2D::new(384.0, 50.0)));
    }

    #[test]
    fn quarter_hours_hit_the_axes() {
        assert!(close(hour_label_position(3, 384.0, 300.0, 250.0), Point2D::new(634.0, 300.0)));
        assert!(close(hour_label_position(6, 384.0, 300.0, 250.0), Point2D::new(384.0, 550.0)));
        assert!(close(hour_label_position(9, 384.0, 300.0, 250.0), Point2D::new(134.0, 300.0)));
    }

    #[test]
    fn positions_are_evenly_spaced_on_the_circle() {
        let center = Point2D::new(384.0, 300.0);
        let all = hour_label_positions(center, 250.0);
        let step = all[0].distance_to(all[1]);
        for i in 0..12 {
            assert!((center.distance_to(all[i]) - 250.0).abs() < 1e-9);
            assert!((all[i].distance_to(all[(i + 1) % 12]) - step).abs() < 1e-9);
        }
        assert!(close(all[11], hour_label_position(12, 384.0, 300.0, 250.0)));
    }

    #[test]
    fn one_oclock_is_right_of_twelve() {
        let one = hour_label_position(1, 384.0, 300.0, 250.0);
        assert!(one.x > 384.0 && one.y < 300.0);
    }

    #[test]
    fn label_frame_offsets_anchor() {
        let frame = label_frame(Point2D::new(634.0, 300.0));
        assert_eq!(frame, Rect::new(609.0, 275.0, 100.0, 50.0));
    }

    #[test]
    fn is_rotation_tracks_hour_hand() {
        assert_eq!(is_label_rotation(3.0, 0.0), 90);
        assert_eq!(is_label_rotation(6.0, 30.0), 195);
        assert_eq!(is_label_rotation(12.0, 0.0), 0);
    }
}
