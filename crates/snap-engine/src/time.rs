/// Fixed timestep accumulator.
/// Ensures scene logic ticks at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Cap on steps per frame, preventing a spiral of death after a stall.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Cooperative countdown timer, decremented by tick dt rather than wall
/// clock. Drives celebration pauses between puzzle rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// An inactive countdown.
    pub fn idle() -> Self {
        Self { remaining: 0.0 }
    }

    /// Start (or restart) the countdown at `secs`.
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
    }

    /// Advance by `dt`. Returns true exactly once: on the tick where the
    /// accumulated time first reaches the full duration.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left (0 when inactive).
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
