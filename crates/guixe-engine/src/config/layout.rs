use crate::coords::{Point2D, Rect};

/// Placement of the face elements on the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceLayout {
    /// Center of the clock disc; both hands pivot here.
    pub center: Point2D,
    pub radius: f64,
    /// Distance of the hour label anchors from `center`.
    pub label_radius: f64,
    /// Radius of the disc behind "IS".
    pub is_disc_radius: f64,
    pub sentence_frame: Rect,
    pub is_frame: Rect,
    pub sentence_text_size: f32,
    pub is_text_size: f32,
    pub label_text_size: f32,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            center: Point2D::new(384.0, 300.0),
            radius: 300.0,
            label_radius: 250.0,
            is_disc_radius: 50.0,
            sentence_frame: Rect::new(84.0, 585.0, 600.0, 100.0),
            is_frame: Rect::new(354.0, 270.0, 60.0, 60.0),
            sentence_text_size: 60.0,
            is_text_size: 60.0,
            label_text_size: 30.0,
        }
    }
}
