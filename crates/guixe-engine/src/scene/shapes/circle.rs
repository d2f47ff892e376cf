use crate::coords::Point2D;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Shadow;

/// Filled circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Point2D,
    pub radius: f64,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Point2D,
        radius: f64,
        color: Color,
        shadow: Option<Shadow>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, color, shadow }));
    }
}
