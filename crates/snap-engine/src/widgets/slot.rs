//! Target slot a puzzle piece commits into.

use glam::Vec2;
use std::fmt::Display;

use crate::draw::{Align, Color, DrawCmd, DrawList};

/// Per-axis distance within which a committed piece is considered to sit on
/// this slot.
const DROP_EPSILON: f32 = 10.0;

pub struct Slot<C> {
    pub pos: Vec2,
    /// Side length of the square outline.
    pub side: f32,
    pub expected: C,
    filled: bool,
    /// Position within the word, shown under word-puzzle slots.
    pub ordinal: Option<usize>,
}

impl<C: Copy + PartialEq> Slot<C> {
    pub fn new(pos: Vec2, side: f32, expected: C) -> Self {
        Self {
            pos,
            side,
            expected,
            filled: false,
            ordinal: None,
        }
    }

    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Mark the slot filled. Returns false if it already was; `filled`
    /// transitions false -> true at most once per puzzle instance.
    pub fn fill(&mut self) -> bool {
        if self.filled {
            return false;
        }
        self.filled = true;
        true
    }

    /// Whether a committed piece position sits on this slot.
    pub fn accepts_drop(&self, pos: Vec2) -> bool {
        (pos.x - self.pos.x).abs() < DROP_EPSILON && (pos.y - self.pos.y).abs() < DROP_EPSILON
    }
}

impl<C: Copy + PartialEq + Display> Slot<C> {
    /// Dashed outline, green once filled, with a caption underneath: the
    /// expected content, or the ordinal when one is set.
    pub fn render(&self, frame: &mut DrawList) {
        let color = if self.filled {
            Color::rgba(0.0, 1.0, 0.0, 0.5)
        } else {
            Color::WHITE.with_alpha(0.5)
        };
        frame.push(DrawCmd::DashedRect {
            pos: self.pos,
            size: Vec2::splat(self.side),
            color,
            width: 3.0,
        });

        let caption = match self.ordinal {
            Some(i) => (i + 1).to_string(),
            None => self.expected.to_string(),
        };
        frame.push(DrawCmd::Text {
            text: caption,
            baseline: Vec2::new(self.pos.x + self.side / 2.0, self.pos.y + self.side + 30.0),
            size: 24.0,
            color: Color::rgb(0.3, 0.3, 0.3),
            align: Align::Center,
        });
    }
}
