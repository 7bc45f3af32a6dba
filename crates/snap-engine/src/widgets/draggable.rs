//! Draggable puzzle piece with snap-to-target commit.
//!
//! The piece follows the pointer exactly while dragged; only scale and
//! rotation are smoothed. On release it either commits onto its snap target
//! (strictly within tolerance) or returns to its home position.

use glam::Vec2;
use std::fmt::Display;

use crate::draw::{Align, Color, DrawCmd, DrawList, Gradient, Paint, Stroke};
use crate::input::InputEvent;
use crate::motion::{approach, decay};

/// Target scale while a piece is held.
const GRAB_SCALE: f32 = 1.2;
/// Exponential smoothing rate for scale.
const SCALE_RATE: f32 = 10.0;
/// Angular rate while dragging, radians per second.
const SPIN_RATE: f32 = 2.0;
/// Rotation decay rate when released (~x0.9 per tick at 60 fps).
const SPIN_DECAY: f32 = 6.3;

const CORNER_RADIUS: f32 = 15.0;
const LABEL_SIZE: f32 = 48.0;

/// Where a piece snaps when released close enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub pos: Vec2,
    /// Euclidean commit radius; the snap test is strict (`distance < tolerance`).
    pub tolerance: f32,
}

/// Discrete outcome of feeding one pointer event to a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Event did not concern this piece.
    Ignored,
    /// Drag began (primary down inside bounds).
    Grabbed,
    /// Position tracked a pointer move while dragging.
    Moved,
    /// Released without committing; piece went home if it had a target.
    Dropped,
    /// Released within tolerance of the snap target; position committed.
    Committed,
}

pub struct Draggable<C> {
    pub pos: Vec2,
    home: Vec2,
    pub size: Vec2,
    /// Opaque comparable label: a number, a letter.
    pub content: C,
    pub color: Color,

    dragging: bool,
    offset: Vec2,

    pub scale: f32,
    target_scale: f32,
    pub rotation: f32,

    snap: Option<SnapTarget>,
    snapped: bool,
}

impl<C: Copy + PartialEq> Draggable<C> {
    pub fn new(pos: Vec2, size: Vec2, content: C, color: Color) -> Self {
        Self {
            pos,
            home: pos,
            size,
            content,
            color,
            dragging: false,
            offset: Vec2::ZERO,
            scale: 1.0,
            target_scale: 1.0,
            rotation: 0.0,
            snap: None,
            snapped: false,
        }
    }

    /// Register the slot position this piece commits to. Set once per
    /// puzzle instance, right after generation.
    pub fn set_snap_target(&mut self, pos: Vec2, tolerance: f32) {
        self.snap = Some(SnapTarget { pos, tolerance });
    }

    pub fn snap_target(&self) -> Option<SnapTarget> {
        self.snap
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped
    }

    /// Inclusive axis-aligned containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }

    /// Feed one pointer event through the drag state machine.
    pub fn handle_pointer(&mut self, event: &InputEvent) -> DragOutcome {
        let pointer = event.pos();

        if event.is_primary_down() {
            if self.contains(pointer) {
                self.dragging = true;
                self.offset = pointer - self.pos;
                self.target_scale = GRAB_SCALE;
                return DragOutcome::Grabbed;
            }
            return DragOutcome::Ignored;
        }

        if matches!(event, InputEvent::PointerMove { .. }) {
            if self.dragging {
                self.pos = pointer - self.offset;
                return DragOutcome::Moved;
            }
            return DragOutcome::Ignored;
        }

        if event.is_primary_up() && self.dragging {
            self.dragging = false;
            self.target_scale = 1.0;
            if let Some(snap) = self.snap {
                if self.pos.distance(snap.pos) < snap.tolerance {
                    self.pos = snap.pos;
                    self.snapped = true;
                    return DragOutcome::Committed;
                }
                self.pos = self.home;
                self.snapped = false;
                return DragOutcome::Dropped;
            }
            return DragOutcome::Dropped;
        }

        DragOutcome::Ignored
    }

    /// Advance scale and rotation animation by one fixed step.
    pub fn tick(&mut self, dt: f32) {
        self.scale = approach(self.scale, self.target_scale, SCALE_RATE, dt);
        if self.dragging {
            self.rotation += SPIN_RATE * dt;
        } else {
            self.rotation = decay(self.rotation, SPIN_DECAY, dt);
        }
    }

    /// Back to the home position, clearing the snapped flag.
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.snapped = false;
        self.dragging = false;
    }
}

impl<C: Copy + PartialEq + Display> Draggable<C> {
    pub fn render(&self, frame: &mut DrawList) {
        // Drop shadow while held
        if self.dragging {
            frame.push(DrawCmd::RoundedRect {
                pos: self.pos + Vec2::splat(5.0),
                size: self.size,
                radius: CORNER_RADIUS,
                paint: Paint::Solid(Color::BLACK.with_alpha(0.3)),
                stroke: None,
                scale: self.scale,
                rotation: self.rotation,
            });
        }

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
            rotation: self.rotation,
        });

        // Label centered in the body; baseline sits a bit below center.
        let baseline = Vec2::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y + self.size.y / 2.0 + LABEL_SIZE * 0.35,
        );
        frame.push_shadowed_text(
            &self.content.to_string(),
            baseline,
            LABEL_SIZE,
            Color::WHITE,
            Align::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputQueue;

    const DT: f32 = 1.0 / 60.0;

    fn piece() -> Draggable<u32> {
        Draggable::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0), 3, Color::WHITE)
    }

    fn drag(p: &mut Draggable<u32>, to: Vec2) {
        let mut q = InputQueue::new();
        q.press(150.0, 150.0);
        q.moved(to.x + 50.0, to.y + 50.0);
        q.release(to.x + 50.0, to.y + 50.0);
        for event in q.drain() {
            p.handle_pointer(&event);
        }
    }

    #[test]
    fn grab_records_offset_and_enlarges() {
        let mut p = piece();
        let down = InputEvent::PointerDown {
            button: crate::input::PointerButton::Primary,
            x: 120.0,
            y: 130.0,
        };
        assert_eq!(p.handle_pointer(&down), DragOutcome::Grabbed);
        assert!(p.is_dragging());
        p.tick(DT);
        assert!(p.scale > 1.0 && p.scale < GRAB_SCALE);
    }

    #[test]
    fn position_tracks_pointer_exactly() {
        let mut p = piece();
        let mut q = InputQueue::new();
        q.press(150.0, 150.0);
        q.moved(400.0, 300.0);
        for event in q.drain() {
            p.handle_pointer(&event);
        }
        // offset was (50, 50) from the piece origin
        assert_eq!(p.pos, Vec2::new(350.0, 250.0));
    }

    #[test]
    fn down_outside_bounds_is_ignored() {
        let mut p = piece();
        let down = InputEvent::PointerDown {
            button: crate::input::PointerButton::Primary,
            x: 300.0,
            y: 300.0,
        };
        assert_eq!(p.handle_pointer(&down), DragOutcome::Ignored);
        assert!(!p.is_dragging());
    }

    #[test]
    fn bounds_are_inclusive() {
        let p = piece();
        assert!(p.contains(Vec2::new(100.0, 100.0)));
        assert!(p.contains(Vec2::new(200.0, 200.0)));
        assert!(!p.contains(Vec2::new(200.01, 200.0)));
    }

    #[test]
    fn commit_lands_exactly_on_target() {
        let mut p = piece();
        p.set_snap_target(Vec2::new(400.0, 200.0), 60.0);
        drag(&mut p, Vec2::new(380.0, 220.0)); // distance ~28 < 60
        assert!(p.is_snapped());
        assert_eq!(p.pos, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn failed_commit_returns_home_exactly() {
        let mut p = piece();
        p.set_snap_target(Vec2::new(400.0, 200.0), 60.0);
        drag(&mut p, Vec2::new(600.0, 500.0));
        assert!(!p.is_snapped());
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn regrab_dropped_far_away_clears_snap_flag() {
        let mut p = piece();
        p.set_snap_target(Vec2::new(400.0, 200.0), 60.0);
        drag(&mut p, Vec2::new(400.0, 200.0));
        assert!(p.is_snapped());

        // Pick it back up off the target and let go well outside tolerance.
        let mut q = InputQueue::new();
        q.press(450.0, 250.0);
        q.moved(700.0, 600.0);
        q.release(700.0, 600.0);
        for event in q.drain() {
            p.handle_pointer(&event);
        }
        assert!(!p.is_snapped());
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn tolerance_is_strict() {
        let mut p = piece();
        p.set_snap_target(Vec2::new(160.0, 100.0), 60.0);
        drag(&mut p, Vec2::new(100.0, 100.0)); // distance exactly 60
        assert!(!p.is_snapped());
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn release_without_target_leaves_piece_in_place() {
        let mut p = piece();
        drag(&mut p, Vec2::new(300.0, 300.0));
        assert_eq!(p.pos, Vec2::new(300.0, 300.0));
        assert!(!p.is_snapped());
    }

    #[test]
    fn rotation_spins_while_held_and_decays_after() {
        let mut p = piece();
        let down = InputEvent::PointerDown {
            button: crate::input::PointerButton::Primary,
            x: 150.0,
            y: 150.0,
        };
        p.handle_pointer(&down);
        for _ in 0..30 {
            p.tick(DT);
        }
        let spun = p.rotation;
        assert!((spun - SPIN_RATE * 0.5).abs() < 1e-4);

        let up = InputEvent::PointerUp {
            button: crate::input::PointerButton::Primary,
            x: 150.0,
            y: 150.0,
        };
        p.handle_pointer(&up);
        for _ in 0..120 {
            p.tick(DT);
        }
        assert!(p.rotation < spun * 0.01);
    }

    #[test]
    fn reset_goes_home_and_clears_snap_flag() {
        let mut p = piece();
        p.set_snap_target(Vec2::new(110.0, 110.0), 60.0);
        drag(&mut p, Vec2::new(110.0, 110.0));
        assert!(p.is_snapped());
        p.reset();
        assert!(!p.is_snapped());
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn render_emits_body_and_label() {
        let p = piece();
        let mut frame = DrawList::new();
        p.render(&mut frame);
        assert!(frame
            .cmds()
            .iter()
            .any(|c| matches!(c, DrawCmd::RoundedRect { .. })));
        assert!(frame
            .cmds()
            .iter()
            .any(|c| matches!(c, DrawCmd::Text { text, .. } if text == "3")));
    }
}
