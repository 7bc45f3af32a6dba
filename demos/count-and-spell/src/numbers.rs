//! Number-ordering puzzle: drag the shuffled digits 1-5 onto their slots.
//!
//! A round completes when every slot is filled; the score counts completed
//! rounds. After a short celebration a fresh permutation is generated,
//! until three rounds are done — then a longer celebration, one progress
//! star, and back to the menu.

use glam::Vec2;
use snap_engine::{
    Button, Color, Countdown, DragOutcome, Draggable, DrawList, InputQueue, Rng, Scene,
    SceneContext, Slot,
};

use crate::{hud, theme, SCENE_MENU, STARS_NUMBERS};

const LABELS: [u32; 5] = [1, 2, 3, 4, 5];
const MAX_ROUNDS: u32 = 3;

const PIECE_SIZE: f32 = 100.0;
const STAGING_X: f32 = 50.0;
const STAGING_Y: f32 = 500.0;
const STAGING_SPACING: f32 = 130.0;

const SLOT_Y: f32 = 300.0;
const SLOT_SPACING: f32 = 150.0;
const SNAP_TOLERANCE: f32 = 60.0;

const ROUND_PAUSE: f32 = 1.5;
const FINAL_PAUSE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Back,
}

pub struct NumbersScene {
    pieces: Vec<Draggable<u32>>,
    slots: Vec<Slot<u32>>,
    back: Button<NavAction>,
    score: u32,
    celebration: Countdown,
    rng: Rng,
}

impl NumbersScene {
    pub fn new(seed: u64) -> Self {
        Self {
            pieces: Vec::new(),
            slots: Vec::new(),
            back: Button::new(
                Vec2::new(50.0, 50.0),
                Vec2::new(150.0, 60.0),
                "< Back",
                theme::BACK_RED,
            )
            .with_action(NavAction::Back),
            score: 0,
            celebration: Countdown::idle(),
            rng: Rng::new(seed),
        }
    }

    /// Target-row position of the slot expecting `value`.
    fn slot_pos(value: u32) -> Vec2 {
        Vec2::new(150.0 + value as f32 * SLOT_SPACING, SLOT_Y)
    }

    /// Discard the previous round and deal a fresh permutation.
    fn generate(&mut self) {
        let mut labels = LABELS;
        self.rng.shuffle(&mut labels);

        self.pieces = labels
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Draggable::new(
                    Vec2::new(STAGING_X + i as f32 * STAGING_SPACING, STAGING_Y),
                    Vec2::splat(PIECE_SIZE),
                    value,
                    theme::number_piece_color(&mut self.rng),
                )
            })
            .collect();

        self.slots = LABELS
            .iter()
            .map(|&value| Slot::new(Self::slot_pos(value), PIECE_SIZE, value))
            .collect();

        for piece in &mut self.pieces {
            piece.set_snap_target(Self::slot_pos(piece.content), SNAP_TOLERANCE);
        }
        log::debug!("numbers round dealt: {:?}", labels);
    }

    /// A piece committed onto its snap position; credit the matching slot.
    fn resolve_commit(&mut self, pos: Vec2, content: u32) {
        let Some(slot) = self.slots.iter_mut().find(|s| s.accepts_drop(pos)) else {
            return;
        };
        if slot.expected != content || !slot.fill() {
            return;
        }
        if self.slots.iter().all(|s| s.is_filled()) {
            self.score += 1;
            log::info!("numbers round complete ({}/{})", self.score, MAX_ROUNDS);
            if self.score >= MAX_ROUNDS {
                self.celebration.start(FINAL_PAUSE);
            } else {
                self.celebration.start(ROUND_PAUSE);
            }
        }
    }
}

impl Scene for NumbersScene {
    fn enter(&mut self, _ctx: &mut SceneContext) {
        self.score = 0;
        self.celebration = Countdown::idle();
        self.generate();
    }

    fn handle_input(&mut self, input: &InputQueue, ctx: &mut SceneContext) {
        for event in input.iter() {
            if let Some(NavAction::Back) = self.back.handle_pointer(event) {
                ctx.change_scene(SCENE_MENU);
            }

            let mut commits = Vec::new();
            for piece in &mut self.pieces {
                if piece.handle_pointer(event) == DragOutcome::Committed {
                    commits.push((piece.pos, piece.content));
                }
            }
            for (pos, content) in commits {
                self.resolve_commit(pos, content);
            }
        }
    }

    fn tick(&mut self, dt: f32, ctx: &mut SceneContext) {
        self.back.tick(dt);
        for piece in &mut self.pieces {
            piece.tick(dt);
        }

        if self.celebration.tick(dt) {
            if self.score >= MAX_ROUNDS {
                ctx.progress.add(STARS_NUMBERS, 1);
                log::info!("numbers session complete, star awarded");
                ctx.change_scene(SCENE_MENU);
            } else {
                self.generate();
            }
        }
    }

    fn render(&self, frame: &mut DrawList) {
        hud::background(
            frame,
            Color::rgb(0.9, 0.7, 0.5),
            Color::rgb(0.8, 0.9, 0.6),
        );
        hud::title(frame, "Put 1-5 in Order!", 150.0, 48.0);

        for slot in &self.slots {
            slot.render(frame);
        }
        for piece in &self.pieces {
            piece.render(frame);
        }

        hud::score_line(frame, &format!("Rounds: {}/{}", self.score, MAX_ROUNDS));
        self.back.render(frame);

        if self.celebration.is_active() {
            hud::celebration(
                frame,
                "Great Job!",
                self.celebration.remaining(),
                Color::rgb(1.0, 0.8, 0.0),
            );
        }
    }
}
