/// Straight-alpha sRGB color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Fills darker than this get white text on top.
pub const DARK_BRIGHTNESS: f32 = 0.25;

impl Color {
    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a color from straight components, clamped to `[0, 1]`.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates an opaque color from a `0xRRGGBB` literal. Bits above the low
    /// 24 are ignored.
    #[inline]
    pub fn from_rgb_hex(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// `0xRRGGBB` form, alpha dropped.
    pub fn to_rgb_hex(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// HSB brightness: the largest channel.
    #[inline]
    pub fn brightness(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Text color that stays readable on top of `self`.
    #[inline]
    pub fn contrasting_text(self) -> Color {
        if self.brightness() < DARK_BRIGHTNESS {
            Color::white()
        } else {
            Color::black()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_round_trips_bytes() {
        assert_eq!(Color::from_rgb_hex(0x7ec4da).to_rgb_hex(), 0x7ec4da);
        assert_eq!(Color::from_rgb_hex(0xff_000000), Color::black());
    }

    #[test]
    fn brightness_is_max_channel() {
        let c = Color::from_rgb_hex(0x373737);
        assert!((c.brightness() - 55.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_rgb_hex(0x0000ff).brightness(), 1.0);
    }

    #[test]
    fn dark_fills_get_white_text() {
        assert_eq!(Color::from_rgb_hex(0x202020).contrasting_text(), Color::white());
        assert_eq!(Color::from_rgb_hex(0x373737).contrasting_text(), Color::white());
        assert_eq!(Color::from_rgb_hex(0x505050).contrasting_text(), Color::black());
        assert_eq!(Color::from_rgb_hex(0xedd514).contrasting_text(), Color::black());
    }

    #[test]
    fn from_srgb_clamps() {
        let c = Color::from_srgb(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }
}
