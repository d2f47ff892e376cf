//! One composed update of the clock face.
//!
//! `ClockFrame::compose` runs every engine component for a given time and
//! configuration; `ClockFrame::record` turns the result into draw commands.
//! Nothing is carried over between updates.

use crate::config::ClockConfig;
use crate::coords::{Point2D, Rect};
use crate::geometry::{
    HourHandVertices, MinuteHandVertices, hour_hand, hour_label_positions, is_label_rotation,
    label_frame, minute_hand,
};
use crate::paint::Color;
use crate::scene::{DrawList, Shadow, TextRole, ZIndex};
use crate::time::TimeOfDay;
use crate::words::{Sentence, WORD_COUNT, select_sentence};

const FACE_SHADOW: Shadow = Shadow::opaque(6.0);
const HAND_SHADOW: Shadow = Shadow::opaque(10.0);
const IS_DISC_SHADOW: Shadow = Shadow::opaque(10.0);

/// An hour label: the word of its slot and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct HourLabel {
    pub word: String,
    pub anchor: Point2D,
    pub frame: Rect,
}

/// Everything drawn for one time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    pub time: TimeOfDay,
    pub hour_hand: HourHandVertices,
    pub minute_hand: MinuteHandVertices,
    /// Index `i` holds hour `i + 1`.
    pub labels: [HourLabel; WORD_COUNT],
    /// Rotation of the "IS" glyph, degrees in [0, 360).
    pub is_rotation: i64,
    pub sentence: Sentence,
    pub sentence_color: Color,
    pub label_color: Color,
}

impl ClockFrame {
    pub fn compose(config: &ClockConfig, time: TimeOfDay) -> Self {
        let layout = &config.layout;
        let words = config.words();

        let hour_hand = hour_hand(layout.center, time.hour(), time.minute(), &config.hands);
        let minute_hand = minute_hand(layout.center, time.minute(), &config.hands);

        let anchors = hour_label_positions(layout.center, layout.label_radius);
        let labels = core::array::from_fn(|i| HourLabel {
            word: words.get(i).to_owned(),
            anchor: anchors[i],
            frame: label_frame(anchors[i]),
        });

        let sentence = select_sentence(&words, time.whole_hour(), time.whole_minute());

        log::debug!(
            "composed {:02}:{:02} -> \"{}\"",
            time.whole_hour(),
            time.whole_minute(),
            sentence
        );

        Self {
            time,
            hour_hand,
            minute_hand,
            labels,
            is_rotation: is_label_rotation(time.hour(), time.minute()),
            sentence,
            sentence_color: config.theme.sentence_text(),
            label_color: config.theme.label_text(),
        }
    }

    /// Records the frame into `list`, back to front.
    pub fn record(&self, config: &ClockConfig, list: &mut DrawList) {
        let layout = &config.layout;
        let theme = &config.theme;

        list.push_circle(ZIndex::FACE, layout.center, layout.radius, theme.clock, Some(FACE_SHADOW));

        list.push_polygon(ZIndex::HANDS, self.hour_hand.polygon(), theme.hands, Some(HAND_SHADOW));
        list.push_polygon(ZIndex::HANDS, self.minute_hand.polygon(), theme.hands, Some(HAND_SHADOW));

        list.push_text(
            ZIndex::OVERLAY,
            self.sentence.to_string(),
            TextRole::Sentence,
            layout.sentence_text_size,
            self.sentence_color,
            layout.sentence_frame,
            0,
        );

        list.push_circle(
            ZIndex::OVERLAY,
            layout.center,
            layout.is_disc_radius,
            theme.is_disc,
            Some(IS_DISC_SHADOW),
        );
        list.push_text(
            ZIndex::OVERLAY,
            "IS",
            TextRole::Is,
            layout.is_text_size,
            Color::black(),
            layout.is_frame,
            self.is_rotation,
        );

        for (slot, label) in self.labels.iter().enumerate() {
            list.push_text(
                ZIndex::OVERLAY,
                label.word.as_str(),
                TextRole::HourLabel(slot),
                layout.label_text_size,
                self.label_color,
                label.frame,
                0,
            );
        }

        log::trace!("recorded {} draw items", list.len());
    }

    /// Word slot whose label frame contains `point`.
    pub fn word_slot_at(&self, point: Point2D) -> Option<usize> {
        self.labels.iter().position(|label| label.frame.contains(point))
    }
}
