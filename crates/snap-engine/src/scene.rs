//! Scene contract and the per-frame context handed to scenes.

use std::collections::HashMap;

use crate::draw::DrawList;
use crate::input::InputQueue;

/// Shared named progress counters (e.g. stars earned per mini-game).
/// Owned by the [`Director`](crate::director::Director) for the life of the
/// process; scenes read and bump counters through [`SceneContext`].
#[derive(Debug, Default)]
pub struct Progress {
    counters: HashMap<String, u32>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter (0 if never written).
    pub fn get(&self, name: &str) -> u32 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Add to a counter, creating it at zero first if needed.
    pub fn add(&mut self, name: &str, amount: u32) {
        *self.counters.entry(name.to_string()).or_insert(0) += amount;
    }
}

/// What a scene asked the Director to do, applied after the current
/// dispatch phase completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    Switch(String),
    Quit,
}

/// Mutable engine state a scene may touch while handling input or ticking.
pub struct SceneContext<'a> {
    pub progress: &'a mut Progress,
    request: &'a mut Option<SceneRequest>,
}

impl<'a> SceneContext<'a> {
    pub fn new(progress: &'a mut Progress, request: &'a mut Option<SceneRequest>) -> Self {
        Self { progress, request }
    }

    /// Ask the Director to switch to a named scene. Unknown names are
    /// ignored by the Director, not an error.
    pub fn change_scene(&mut self, name: impl Into<String>) {
        *self.request = Some(SceneRequest::Switch(name.into()));
    }

    /// Ask the Director to stop after the current frame.
    pub fn quit(&mut self) {
        *self.request = Some(SceneRequest::Quit);
    }
}

/// The contract every scene fulfills. The Director forwards input batches,
/// fixed-step ticks, and render passes to the single active scene.
pub trait Scene {
    /// Called when the scene becomes active. Build puzzle state here.
    fn enter(&mut self, ctx: &mut SceneContext);

    /// Called when the scene stops being active.
    fn exit(&mut self, _ctx: &mut SceneContext) {}

    /// Handle one frame's batch of input events.
    fn handle_input(&mut self, input: &InputQueue, ctx: &mut SceneContext);

    /// Advance timers and animations by one fixed step.
    fn tick(&mut self, dt: f32, ctx: &mut SceneContext);

    /// Append this frame's draw commands.
    fn render(&self, frame: &mut DrawList);
}
