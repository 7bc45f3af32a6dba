//! Drawing helpers shared by the scenes: background wash, titles, score
//! line, celebration overlay.

use glam::Vec2;
use snap_engine::{Align, Color, DrawCmd, DrawList, Gradient, Paint};

use crate::{WORLD_H, WORLD_W};

/// Full-screen vertical gradient wash.
pub fn background(frame: &mut DrawList, top: Color, bottom: Color) {
    frame.push(DrawCmd::Rect {
        pos: Vec2::ZERO,
        size: Vec2::new(WORLD_W, WORLD_H),
        paint: Paint::Vertical(Gradient::new(top, bottom)),
    });
}

/// Big centered title with a drop shadow.
pub fn title(frame: &mut DrawList, text: &str, baseline_y: f32, size: f32) {
    frame.push_shadowed_text(
        text,
        Vec2::new(WORLD_W / 2.0, baseline_y),
        size,
        Color::WHITE,
        Align::Center,
    );
}

/// Score line near the top-right corner.
pub fn score_line(frame: &mut DrawList, text: &str) {
    frame.push(DrawCmd::Text {
        text: text.to_string(),
        baseline: Vec2::new(WORLD_W - 250.0, 100.0),
        size: 32.0,
        color: Color::WHITE,
        align: Align::Left,
    });
}

/// Dimming overlay with pulsing celebration text. `remaining` is the
/// countdown's remaining seconds; the pulse rides on it so the effect is
/// replayable from tick times alone.
pub fn celebration(frame: &mut DrawList, text: &str, remaining: f32, color: Color) {
    frame.push(DrawCmd::Rect {
        pos: Vec2::ZERO,
        size: Vec2::new(WORLD_W, WORLD_H),
        paint: Paint::Solid(Color::BLACK.with_alpha(0.7)),
    });

    let pulse = 1.0 + 0.1 * (remaining * 10.0).sin();
    frame.push(DrawCmd::Text {
        text: text.to_string(),
        baseline: Vec2::new(WORLD_W / 2.0, WORLD_H / 2.0),
        size: 72.0 * pulse,
        color,
        align: Align::Center,
    });
}
