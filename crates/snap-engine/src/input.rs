use glam::Vec2;

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Input event types the engine understands.
/// Generic — no game-specific semantics. Every variant carries the pointer
/// position at the time the event fired, so handlers never have to query
/// the host for "where is the pointer right now".
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A pointer button went down at world coordinates (x, y).
    PointerDown { button: PointerButton, x: f32, y: f32 },
    /// A pointer button was released at world coordinates (x, y).
    PointerUp { button: PointerButton, x: f32, y: f32 },
    /// The pointer moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
}

impl InputEvent {
    /// The pointer position carried by this event.
    pub fn pos(&self) -> Vec2 {
        match *self {
            InputEvent::PointerDown { x, y, .. }
            | InputEvent::PointerUp { x, y, .. }
            | InputEvent::PointerMove { x, y } => Vec2::new(x, y),
        }
    }

    /// Whether this is a primary-button down event.
    pub fn is_primary_down(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown { button: PointerButton::Primary, .. }
        )
    }

    /// Whether this is a primary-button up event.
    pub fn is_primary_up(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp { button: PointerButton::Primary, .. }
        )
    }
}

/// A queue of input events.
/// The host shell writes events into the queue; the Director reads and
/// drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host shell).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Convenience: push a primary-button press at (x, y).
    pub fn press(&mut self, x: f32, y: f32) {
        self.push(InputEvent::PointerDown {
            button: PointerButton::Primary,
            x,
            y,
        });
    }

    /// Convenience: push a pointer move to (x, y).
    pub fn moved(&mut self, x: f32, y: f32) {
        self.push(InputEvent::PointerMove { x, y });
    }

    /// Convenience: push a primary-button release at (x, y).
    pub fn release(&mut self, x: f32, y: f32) {
        self.push(InputEvent::PointerUp {
            button: PointerButton::Primary,
            x,
            y,
        });
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.press(10.0, 20.0);
        q.moved(15.0, 25.0);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn events_carry_positions() {
        let mut q = InputQueue::new();
        q.release(3.0, 4.0);
        let events = q.drain();
        assert_eq!(events[0].pos(), Vec2::new(3.0, 4.0));
        assert!(events[0].is_primary_up());
        assert!(!events[0].is_primary_down());
    }

    #[test]
    fn secondary_button_is_not_primary() {
        let down = InputEvent::PointerDown {
            button: PointerButton::Secondary,
            x: 0.0,
            y: 0.0,
        };
        assert!(!down.is_primary_down());
    }
}
