pub mod director;
pub mod draw;
pub mod input;
pub mod motion;
pub mod rng;
pub mod scene;
pub mod time;
pub mod widgets;

// Re-export key types at crate root for convenience
pub use director::Director;
pub use draw::{Align, Color, DrawCmd, DrawList, Gradient, Paint, Stroke};
pub use input::{InputEvent, InputQueue, PointerButton};
pub use motion::{approach, decay};
pub use rng::Rng;
pub use scene::{Progress, Scene, SceneContext, SceneRequest};
pub use time::{Countdown, FixedTimestep};
pub use widgets::button::Button;
pub use widgets::draggable::{DragOutcome, Draggable, SnapTarget};
pub use widgets::slot::Slot;
