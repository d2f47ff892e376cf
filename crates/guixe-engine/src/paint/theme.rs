use super::Color;

/// The face colors a user can pick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorTarget {
    Background,
    Clock,
    Hands,
}

/// Fill colors of the clock face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Clock disc.
    pub clock: Color,
    /// Both hand polygons.
    pub hands: Color,
    /// Disc behind the center "IS".
    pub is_disc: Color,
}

impl Theme {
    #[inline]
    pub fn color(&self, target: ColorTarget) -> Color {
        match target {
            ColorTarget::Background => self.background,
            ColorTarget::Clock => self.clock,
            ColorTarget::Hands => self.hands,
        }
    }

    #[inline]
    pub fn set_color(&mut self, target: ColorTarget, color: Color) {
        match target {
            ColorTarget::Background => self.background = color,
            ColorTarget::Clock => self.clock = color,
            ColorTarget::Hands => self.hands = color,
        }
    }

    /// Sentence text, drawn on the background.
    #[inline]
    pub fn sentence_text(&self) -> Color {
        self.background.contrasting_text()
    }

    /// Hour label text, drawn on the clock disc.
    #[inline]
    pub fn label_text(&self) -> Color {
        self.clock.contrasting_text()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb_hex(0x373737),
            clock: Color::from_rgb_hex(0x7ec4da),
            hands: Color::from_rgb_hex(0xedd514),
            is_disc: Color::from_rgb_hex(0xf2ebd5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_color_targets_one_fill() {
        let mut theme = Theme::default();
        let red = Color::from_rgb_hex(0xff0000);
        theme.set_color(ColorTarget::Hands, red);
        assert_eq!(theme.color(ColorTarget::Hands), red);
        assert_eq!(theme.clock, Theme::default().clock);
        assert_eq!(theme.is_disc, Theme::default().is_disc);
    }

    #[test]
    fn text_follows_fill_brightness() {
        let mut theme = Theme::default();
        assert_eq!(theme.label_text(), Color::black());
        theme.set_color(ColorTarget::Clock, Color::from_rgb_hex(0x101010));
        assert_eq!(theme.label_text(), Color::white());
    }
}
