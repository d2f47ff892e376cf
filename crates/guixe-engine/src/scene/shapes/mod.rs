pub(crate) mod circle;
pub(crate) mod polygon;
pub(crate) mod text;

/// Soft drop shadow cast by a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    /// Blur radius in canvas points.
    pub radius: f64,
    pub opacity: f32,
}

impl Shadow {
    /// Fully opaque shadow with the given blur radius.
    #[inline]
    pub const fn opaque(radius: f64) -> Self {
        Self { radius, opacity: 1.0 }
    }
}
