//! Scene host: registry, transitions, and the per-frame loop body.
//!
//! The host shell owns the window and frame clock; each frame it pushes
//! pointer events into an [`InputQueue`] and calls [`Director::frame`] with
//! the elapsed time and a [`DrawList`] to fill. Everything inside runs
//! synchronously: input dispatch, fixed-step ticks, then render.

use std::collections::HashMap;

use crate::draw::DrawList;
use crate::input::InputQueue;
use crate::scene::{Progress, Scene, SceneContext, SceneRequest};
use crate::time::FixedTimestep;

const DEFAULT_DT: f32 = 1.0 / 60.0;

pub struct Director {
    scenes: HashMap<String, Box<dyn Scene>>,
    active: Option<String>,
    progress: Progress,
    timestep: FixedTimestep,
    running: bool,
}

impl Director {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
            progress: Progress::new(),
            timestep: FixedTimestep::new(DEFAULT_DT),
            running: true,
        }
    }

    pub fn with_fixed_dt(mut self, dt: f32) -> Self {
        self.timestep = FixedTimestep::new(dt);
        self
    }

    /// Register a scene under a name. Re-registering a name replaces the
    /// previous scene.
    pub fn register(&mut self, name: impl Into<String>, scene: Box<dyn Scene>) {
        self.scenes.insert(name.into(), scene);
    }

    /// Switch the active scene: exit hook on the old one, swap, enter hook
    /// on the new one. Unknown names are a logged no-op.
    pub fn transition(&mut self, name: &str) {
        if !self.scenes.contains_key(name) {
            log::warn!("transition to unknown scene '{}' ignored", name);
            return;
        }
        let mut request = None;
        if let Some(current) = self.active.clone() {
            if let Some(scene) = self.scenes.get_mut(&current) {
                let mut ctx = SceneContext::new(&mut self.progress, &mut request);
                scene.exit(&mut ctx);
            }
        }
        log::info!("scene -> {}", name);
        self.active = Some(name.to_string());
        if let Some(scene) = self.scenes.get_mut(name) {
            let mut ctx = SceneContext::new(&mut self.progress, &mut request);
            scene.enter(&mut ctx);
        }
        // A scene may redirect from its enter/exit hooks.
        self.apply(request);
    }

    /// Run one frame: drain input into the active scene, advance fixed
    /// steps, render. No-op once the Director has been asked to quit.
    pub fn frame(&mut self, dt: f32, input: &mut InputQueue, frame: &mut DrawList) {
        if !self.running {
            input.drain();
            return;
        }

        let events_pending = !input.is_empty();
        if events_pending {
            let request = self.dispatch(|scene, ctx| scene.handle_input(input, ctx));
            self.apply(request);
        }
        input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            let fixed_dt = self.timestep.dt();
            let request = self.dispatch(|scene, ctx| scene.tick(fixed_dt, ctx));
            self.apply(request);
            if !self.running {
                break;
            }
        }

        frame.clear();
        if let Some(name) = &self.active {
            if let Some(scene) = self.scenes.get(name) {
                scene.render(frame);
            }
        }
    }

    /// Whether the quit signal has been raised.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Name of the active scene, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    fn dispatch<F>(&mut self, f: F) -> Option<SceneRequest>
    where
        F: FnOnce(&mut Box<dyn Scene>, &mut SceneContext),
    {
        let mut request = None;
        if let Some(name) = self.active.clone() {
            if let Some(scene) = self.scenes.get_mut(&name) {
                let mut ctx = SceneContext::new(&mut self.progress, &mut request);
                f(scene, &mut ctx);
            }
        }
        request
    }

    fn apply(&mut self, request: Option<SceneRequest>) {
        match request {
            Some(SceneRequest::Switch(name)) => self.transition(&name),
            Some(SceneRequest::Quit) => {
                log::info!("quit requested");
                self.running = false;
            }
            None => {}
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scene that records its lifecycle calls and can raise a request.
    struct Probe {
        calls: Rc<RefCell<Vec<String>>>,
        name: &'static str,
        on_tick: Option<SceneRequest>,
    }

    impl Probe {
        fn new(calls: Rc<RefCell<Vec<String>>>, name: &'static str) -> Self {
            Self {
                calls,
                name,
                on_tick: None,
            }
        }

        fn log(&self, what: &str) {
            self.calls.borrow_mut().push(format!("{}.{}", self.name, what));
        }
    }

    impl Scene for Probe {
        fn enter(&mut self, _ctx: &mut SceneContext) {
            self.log("enter");
        }

        fn exit(&mut self, _ctx: &mut SceneContext) {
            self.log("exit");
        }

        fn handle_input(&mut self, _input: &InputQueue, _ctx: &mut SceneContext) {
            self.log("input");
        }

        fn tick(&mut self, _dt: f32, ctx: &mut SceneContext) {
            self.log("tick");
            match self.on_tick.take() {
                Some(SceneRequest::Switch(name)) => ctx.change_scene(name),
                Some(SceneRequest::Quit) => ctx.quit(),
                None => {}
            }
        }

        fn render(&self, _frame: &mut DrawList) {}
    }

    fn harness() -> (Director, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut director = Director::new();
        director.register("a", Box::new(Probe::new(calls.clone(), "a")));
        director.register("b", Box::new(Probe::new(calls.clone(), "b")));
        (director, calls)
    }

    #[test]
    fn transition_runs_exit_then_enter() {
        let (mut director, calls) = harness();
        director.transition("a");
        director.transition("b");
        assert_eq!(
            *calls.borrow(),
            vec!["a.enter", "a.exit", "b.enter"]
        );
        assert_eq!(director.active(), Some("b"));
    }

    #[test]
    fn unknown_transition_is_noop() {
        let (mut director, _calls) = harness();
        director.transition("a");
        director.transition("nope");
        assert_eq!(director.active(), Some("a"));
        assert!(director.is_running());
    }

    #[test]
    fn frame_without_active_scene_does_not_fault() {
        let mut director = Director::new();
        let mut input = InputQueue::new();
        input.press(1.0, 1.0);
        let mut frame = DrawList::new();
        director.frame(1.0 / 60.0, &mut input, &mut frame);
        assert!(input.is_empty());
        assert!(frame.is_empty());
    }

    #[test]
    fn scene_requested_switch_applies_mid_frame() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut director = Director::new();
        let mut probe = Probe::new(calls.clone(), "a");
        probe.on_tick = Some(SceneRequest::Switch("b".into()));
        director.register("a", Box::new(probe));
        director.register("b", Box::new(Probe::new(calls.clone(), "b")));
        director.transition("a");

        let mut input = InputQueue::new();
        let mut frame = DrawList::new();
        director.frame(1.0 / 60.0, &mut input, &mut frame);
        assert_eq!(director.active(), Some("b"));
        assert!(calls.borrow().contains(&"a.exit".to_string()));
    }

    #[test]
    fn quit_stops_future_frames() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut director = Director::new();
        let mut probe = Probe::new(calls.clone(), "a");
        probe.on_tick = Some(SceneRequest::Quit);
        director.register("a", Box::new(probe));
        director.transition("a");

        let mut input = InputQueue::new();
        let mut frame = DrawList::new();
        director.frame(1.0 / 60.0, &mut input, &mut frame);
        assert!(!director.is_running());

        let before = calls.borrow().len();
        director.frame(1.0 / 60.0, &mut input, &mut frame);
        assert_eq!(calls.borrow().len(), before, "stopped director still ticked");
    }
}
