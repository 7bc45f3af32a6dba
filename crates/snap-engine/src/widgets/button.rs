//! Clickable button with hover/press animation.
//!
//! The bound action is a plain cloneable value, handed back exactly once
//! per qualifying press-release pair; the owning scene decides what it
//! means (scene change, quit, ...).

use glam::Vec2;

use crate::draw::{Align, Color, DrawCmd, DrawList, Gradient, Paint, Stroke};
use crate::input::InputEvent;
use crate::motion::approach;

const PRESSED_SCALE: f32 = 0.95;
const HOVER_SCALE: f32 = 1.1;
const SCALE_RATE: f32 = 10.0;
const CORNER_RADIUS: f32 = 20.0;
const LABEL_SIZE: f32 = 28.0;

pub struct Button<A> {
    pub pos: Vec2,
    pub size: Vec2,
    pub label: String,
    pub color: Color,
    pub text_color: Color,

    hover: bool,
    pressed: bool,
    pub scale: f32,
    target_scale: f32,

    action: Option<A>,
}

impl<A: Clone> Button<A> {
    pub fn new(pos: Vec2, size: Vec2, label: impl Into<String>, color: Color) -> Self {
        Self {
            pos,
            size,
            label: label.into(),
            color,
            text_color: Color::WHITE,
            hover: false,
            pressed: false,
            scale: 1.0,
            target_scale: 1.0,
            action: None,
        }
    }

    /// Bind the action emitted on click. Without one, clicks are no-ops.
    pub fn with_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }

    /// Feed one pointer event. Returns the bound action when a click
    /// completes (pressed here, released here).
    pub fn handle_pointer(&mut self, event: &InputEvent) -> Option<A> {
        // Hover follows every event's position, not just moves.
        self.hover = self.contains(event.pos());

        if event.is_primary_down() {
            if self.hover {
                self.pressed = true;
                self.target_scale = PRESSED_SCALE;
            }
            return None;
        }

        if event.is_primary_up() {
            // Emit before clearing the pressed flag.
            let fired = if self.pressed && self.hover {
                self.action.clone()
            } else {
                None
            };
            self.pressed = false;
            self.target_scale = if self.hover { HOVER_SCALE } else { 1.0 };
            return fired;
        }

        None
    }

    /// Advance the scale animation by one fixed step.
    pub fn tick(&mut self, dt: f32) {
        if !self.pressed {
            self.target_scale = if self.hover { HOVER_SCALE } else { 1.0 };
        }
        self.scale = approach(self.scale, self.target_scale, SCALE_RATE, dt);
    }

    pub fn render(&self, frame: &mut DrawList) {
        frame.push(DrawCmd::RoundedRect {
            pos: self.pos,
            size: self.size,
            radius: CORNER_RADIUS,
            paint: Paint::Vertical(Gradient::sheen(self.color)),
            stroke: Some(Stroke {
                color: Color::WHITE,
                width: 3.0,
            }),
            scale: self.scale,
            rotation: 0.0,
        });

        if self.hover {
            frame.push(DrawCmd::RoundedRect {
                pos: self.pos,
                size: self.size,
                radius: CORNER_RADIUS,
                paint: Paint::Solid(Color::rgba(0.0, 0.0, 0.0, 0.0)),
                stroke: Some(Stroke {
                    color: Color::BLACK.with_alpha(0.3),
                    width: 8.0,
                }),
                scale: self.scale,
                rotation: 0.0,
            });
        }

        let baseline = Vec2::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y + self.size.y / 2.0 + LABEL_SIZE * 0.35,
        );
        frame.push_shadowed_text(&self.label, baseline, LABEL_SIZE, self.text_color, Align::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputQueue;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Go,
    }

    fn button() -> Button<Act> {
        Button::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 60.0), "Play", Color::WHITE)
            .with_action(Act::Go)
    }

    fn run(b: &mut Button<Act>, events: &mut InputQueue) -> Vec<Act> {
        events
            .drain()
            .iter()
            .filter_map(|e| b.handle_pointer(e))
            .collect()
    }

    #[test]
    fn click_fires_exactly_once() {
        let mut b = button();
        let mut q = InputQueue::new();
        q.press(150.0, 120.0);
        q.release(150.0, 120.0);
        assert_eq!(run(&mut b, &mut q), vec![Act::Go]);
        assert!(!b.is_pressed());
    }

    #[test]
    fn leaving_bounds_before_release_cancels() {
        let mut b = button();
        let mut q = InputQueue::new();
        q.press(150.0, 120.0);
        q.moved(500.0, 500.0);
        q.release(500.0, 500.0);
        assert!(run(&mut b, &mut q).is_empty());
        assert!(!b.is_pressed());
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut b = button();
        let mut q = InputQueue::new();
        q.release(150.0, 120.0);
        assert!(run(&mut b, &mut q).is_empty());
    }

    #[test]
    fn press_outside_never_arms() {
        let mut b = button();
        let mut q = InputQueue::new();
        q.press(50.0, 50.0);
        q.moved(150.0, 120.0);
        q.release(150.0, 120.0);
        assert!(run(&mut b, &mut q).is_empty());
    }

    #[test]
    fn unbound_action_is_silent_noop() {
        let mut b: Button<Act> =
            Button::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), "x", Color::WHITE);
        let mut q = InputQueue::new();
        q.press(5.0, 5.0);
        q.release(5.0, 5.0);
        assert!(run(&mut b, &mut q).is_empty());
    }

    #[test]
    fn scale_targets_follow_state() {
        let mut b = button();
        let mut q = InputQueue::new();
        q.moved(150.0, 120.0);
        run(&mut b, &mut q);
        b.tick(1.0); // big dt lands on target
        assert_eq!(b.scale, HOVER_SCALE);

        q.press(150.0, 120.0);
        run(&mut b, &mut q);
        b.tick(1.0);
        assert_eq!(b.scale, PRESSED_SCALE);

        q.release(150.0, 120.0);
        run(&mut b, &mut q);
        b.tick(1.0);
        assert_eq!(b.scale, HOVER_SCALE);
    }
}
