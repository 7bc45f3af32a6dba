//! Word-assembly puzzle: drag shuffled letters into place to spell a word.
//!
//! Each completed word scores one point and deals a new word; after three
//! words a longer celebration runs, a star is recorded, and the scene
//! returns to the menu. Slots are assigned to pieces bijectively so words
//! with repeated letters stay solvable.

use glam::Vec2;
use snap_engine::{
    Button, Color, Countdown, DragOutcome, Draggable, DrawList, InputQueue, Rng, Scene,
    SceneContext, Slot,
};

use crate::bank::WordBank;
use crate::{hud, theme, SCENE_MENU, STARS_WORDS, WORLD_W};

const MAX_WORDS: u32 = 3;

const PIECE_SIZE: f32 = 90.0;
const SPACING: f32 = 120.0;
const STAGING_Y: f32 = 500.0;
const SLOT_Y: f32 = 280.0;
const SNAP_TOLERANCE: f32 = 60.0;

const WORD_PAUSE: f32 = 1.5;
const FINAL_PAUSE: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Back,
}

pub struct WordsScene {
    bank: WordBank,
    current_word: String,
    pieces: Vec<Draggable<char>>,
    slots: Vec<Slot<char>>,
    back: Button<NavAction>,
    score: u32,
    celebration: Countdown,
    rng: Rng,
}

impl WordsScene {
    pub fn new(seed: u64) -> Self {
        Self::with_bank(seed, WordBank::builtin())
    }

    pub fn with_bank(seed: u64, bank: WordBank) -> Self {
        let bank = if bank.is_empty() {
            log::warn!("empty word bank supplied, falling back to built-in words");
            WordBank::builtin()
        } else {
            bank
        };
        Self {
            bank,
            current_word: String::new(),
            pieces: Vec::new(),
            slots: Vec::new(),
            back: Button::new(
                Vec2::new(50.0, 50.0),
                Vec2::new(150.0, 60.0),
                "< Back",
                theme::BACK_GREEN,
            )
            .with_action(NavAction::Back),
            score: 0,
            celebration: Countdown::idle(),
            rng: Rng::new(seed),
        }
    }

    fn row_x(len: usize, index: usize) -> f32 {
        (WORLD_W - len as f32 * SPACING) / 2.0 + index as f32 * SPACING
    }

    /// Deal a new word: shuffled letter pieces on the staging row, one slot
    /// per letter position on the target row.
    fn generate(&mut self) {
        let index = self.rng.next_int(self.bank.len() as u32) as usize;
        self.current_word = self.bank.pick(index).to_string();

        let mut letters: Vec<char> = self.current_word.chars().collect();
        self.rng.shuffle(&mut letters);
        let count = letters.len();

        self.pieces = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| {
                Draggable::new(
                    Vec2::new(Self::row_x(count, i), STAGING_Y),
                    Vec2::splat(PIECE_SIZE),
                    letter,
                    theme::letter_piece_color(&mut self.rng),
                )
            })
            .collect();

        self.slots = self
            .current_word
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                Slot::new(Vec2::new(Self::row_x(count, i), SLOT_Y), PIECE_SIZE, letter)
                    .with_ordinal(i)
            })
            .collect();

        // Each slot claims the first unclaimed piece with its letter, so
        // repeated letters map one-to-one.
        for slot in &self.slots {
            if let Some(piece) = self
                .pieces
                .iter_mut()
                .find(|p| p.content == slot.expected && p.snap_target().is_none())
            {
                piece.set_snap_target(slot.pos, SNAP_TOLERANCE);
            }
        }
        log::debug!("word dealt: {}", self.current_word);
    }

    /// A piece committed onto its snap position; credit the matching slot
    /// and check for word completion.
    fn resolve_commit(&mut self, pos: Vec2, content: char) {
        let Some(slot) = self.slots.iter_mut().find(|s| s.accepts_drop(pos)) else {
            return;
        };
        if slot.expected != content || !slot.fill() {
            return;
        }
        if self.slots.iter().all(|s| s.is_filled()) {
            self.score += 1;
            log::info!(
                "word '{}' complete ({}/{})",
                self.current_word,
                self.score,
                MAX_WORDS
            );
            if self.score >= MAX_WORDS {
                self.celebration.start(FINAL_PAUSE);
            } else {
                self.celebration.start(WORD_PAUSE);
            }
        }
    }
}

impl Scene for WordsScene {
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
            if self.score >= MAX_WORDS {
                ctx.progress.add(STARS_WORDS, 1);
                log::info!("words session complete, star awarded");
                ctx.change_scene(SCENE_MENU);
            } else {
                self.generate();
            }
        }
    }

    fn render(&self, frame: &mut DrawList) {
        hud::background(
            frame,
            Color::rgb(0.6, 0.8, 0.9),
            Color::rgb(0.9, 0.6, 0.8),
        );
        hud::title(frame, &format!("Spell: {}", self.current_word), 150.0, 48.0);
        frame.push(snap_engine::DrawCmd::Text {
            text: "Drag each letter to its box!".to_string(),
            baseline: Vec2::new(WORLD_W / 2.0, 200.0),
            size: 28.0,
            color: Color::rgb(0.2, 0.2, 0.2),
            align: snap_engine::Align::Center,
        });

        for slot in &self.slots {
            slot.render(frame);
        }
        for piece in &self.pieces {
            piece.render(frame);
        }

        hud::score_line(frame, &format!("Words: {}/{}", self.score, MAX_WORDS));
        self.back.render(frame);

        if self.celebration.is_active() {
            hud::celebration(
                frame,
                "Super Spelling!",
                self.celebration.remaining(),
                Color::rgb(1.0, 0.9, 0.3),
            );
        }
    }
}
