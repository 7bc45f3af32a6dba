//! Count & Spell — a drag-and-drop learning game for young children.
//!
//! Two mini-games hang off a main menu: put the numbers 1-5 in order, and
//! spell a word by dragging its letters into slots. The host shell feeds
//! pointer events and frame time into the [`Director`] and replays the
//! resulting draw commands.

use snap_engine::Director;

pub mod bank;
pub mod hud;
pub mod menu;
pub mod numbers;
pub mod theme;
pub mod words;

pub use menu::MenuScene;
pub use numbers::NumbersScene;
pub use words::WordsScene;

/// World size in game units; the drawing surface maps 1:1.
pub const WORLD_W: f32 = 1024.0;
pub const WORLD_H: f32 = 768.0;

/// Scene names known to the Director.
pub const SCENE_MENU: &str = "menu";
pub const SCENE_NUMBERS: &str = "numbers";
pub const SCENE_WORDS: &str = "words";

/// Progress counter keys (stars shown on the menu).
pub const STARS_NUMBERS: &str = "stars_numbers";
pub const STARS_WORDS: &str = "stars_words";

/// Wire up all scenes and land on the menu. `seed` drives puzzle shuffles,
/// so a full session is replayable.
pub fn build_game(seed: u64) -> Director {
    let mut director = Director::new();
    director.register(SCENE_MENU, Box::new(MenuScene::new()));
    director.register(SCENE_NUMBERS, Box::new(NumbersScene::new(seed)));
    director.register(
        SCENE_WORDS,
        Box::new(WordsScene::new(seed.wrapping_mul(0x9e37_79b9_7f4a_7c15))),
    );
    director.transition(SCENE_MENU);
    log::info!("game ready (seed {})", seed);
    director
}
