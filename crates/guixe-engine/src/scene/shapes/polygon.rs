use crate::coords::Point2D;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Shadow;

/// Filled closed polygon payload. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Point2D>,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl DrawList {
    /// Records a filled polygon.
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: Vec<Point2D>,
        color: Color,
        shadow: Option<Shadow>,
    ) {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 points");
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, color, shadow }));
    }
}
