//! Main menu: play buttons, drifting pastel particles, star progress.

use glam::Vec2;
use snap_engine::{Button, Color, DrawCmd, DrawList, InputQueue, Scene, SceneContext};

use crate::{hud, theme, SCENE_NUMBERS, SCENE_WORDS, STARS_NUMBERS, STARS_WORDS, WORLD_H, WORLD_W};

const BUTTON_SIZE: Vec2 = Vec2::new(300.0, 80.0);
const BUTTON_START_Y: f32 = 300.0;
const BUTTON_SPACING: f32 = 100.0;
const PARTICLE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    PlayNumbers,
    PlayWords,
    Quit,
}

struct Particle {
    pos: Vec2,
    size: f32,
    speed: f32,
    color: Color,
}

pub struct MenuScene {
    buttons: Vec<Button<MenuAction>>,
    particles: Vec<Particle>,
    time: f32,
    stars_numbers: u32,
    stars_words: u32,
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
            particles: Vec::new(),
            time: 0.0,
            stars_numbers: 0,
            stars_words: 0,
        }
    }

    fn build_buttons(&mut self) {
        let x = (WORLD_W - BUTTON_SIZE.x) / 2.0;
        self.buttons = vec![
            Button::new(
                Vec2::new(x, BUTTON_START_Y),
                BUTTON_SIZE,
                "Learn Numbers",
                theme::CORAL,
            )
            .with_action(MenuAction::PlayNumbers),
            Button::new(
                Vec2::new(x, BUTTON_START_Y + BUTTON_SPACING),
                BUTTON_SIZE,
                "Learn Letters",
                theme::TEAL,
            )
            .with_action(MenuAction::PlayWords),
            Button::new(
                Vec2::new(x, BUTTON_START_Y + BUTTON_SPACING * 2.0),
                BUTTON_SIZE,
                "Exit",
                theme::ORANGE,
            )
            .with_action(MenuAction::Quit),
        ];
    }

    fn build_particles(&mut self) {
        self.particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                pos: Vec2::new(
                    i as f32 * WORLD_W / PARTICLE_COUNT as f32,
                    (i as f32 * 50.0) % WORLD_H,
                ),
                size: 20.0 + (i % 3) as f32 * 10.0,
                speed: 20.0 + (i % 4) as f32 * 10.0,
                color: theme::PASTELS[i % theme::PASTELS.len()],
            })
            .collect();
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MenuScene {
    fn enter(&mut self, ctx: &mut SceneContext) {
        self.build_buttons();
        self.build_particles();
        self.stars_numbers = ctx.progress.get(STARS_NUMBERS);
        self.stars_words = ctx.progress.get(STARS_WORDS);
    }

    fn handle_input(&mut self, input: &InputQueue, ctx: &mut SceneContext) {
        for event in input.iter() {
            for button in &mut self.buttons {
                match button.handle_pointer(event) {
                    Some(MenuAction::PlayNumbers) => ctx.change_scene(SCENE_NUMBERS),
                    Some(MenuAction::PlayWords) => ctx.change_scene(SCENE_WORDS),
                    Some(MenuAction::Quit) => ctx.quit(),
                    None => {}
                }
            }
        }
    }

    fn tick(&mut self, dt: f32, _ctx: &mut SceneContext) {
        self.time += dt;
        for button in &mut self.buttons {
            button.tick(dt);
        }
        for particle in &mut self.particles {
            particle.pos.y += particle.speed * dt;
            if particle.pos.y > WORLD_H {
                particle.pos.y = -particle.size;
            }
        }
    }

    fn render(&self, frame: &mut DrawList) {
        hud::background(
            frame,
            Color::rgb(0.4, 0.6, 0.9),
            Color::rgb(0.8, 0.4, 0.9),
        );

        for particle in &self.particles {
            let pulse = 0.8 + 0.2 * (self.time * 2.0 + particle.pos.x).sin();
            frame.push(DrawCmd::Circle {
                center: particle.pos,
                radius: particle.size * pulse,
                color: particle.color.with_alpha(0.3),
            });
        }

        hud::title(frame, "Count & Spell", 150.0, 72.0);
        frame.push(DrawCmd::Text {
            text: "a learning adventure".to_string(),
            baseline: Vec2::new(WORLD_W / 2.0, 200.0),
            size: 32.0,
            color: Color::WHITE.with_alpha(0.9),
            align: snap_engine::Align::Center,
        });

        for button in &self.buttons {
            button.render(frame);
        }

        frame.push(DrawCmd::Text {
            text: format!("* Numbers: {}", self.stars_numbers),
            baseline: Vec2::new(50.0, WORLD_H - 100.0),
            size: 24.0,
            color: Color::WHITE,
            align: snap_engine::Align::Left,
        });
        frame.push(DrawCmd::Text {
            text: format!("* Letters: {}", self.stars_words),
            baseline: Vec2::new(50.0, WORLD_H - 60.0),
            size: 24.0,
            color: Color::WHITE,
            align: snap_engine::Align::Left,
        });
    }
}
