//! Shared palette.

use snap_engine::{Color, Rng};

/// Menu button colors.
pub const CORAL: Color = Color::rgb(1.0, 0.42, 0.42);
pub const TEAL: Color = Color::rgb(0.31, 0.8, 0.77);
pub const ORANGE: Color = Color::rgb(1.0, 0.62, 0.25);

/// Back buttons on the two puzzle scenes.
pub const BACK_RED: Color = Color::rgb(0.78, 0.39, 0.39);
pub const BACK_GREEN: Color = Color::rgb(0.39, 0.78, 0.39);

/// Pastel rotation for the menu's background particles.
pub const PASTELS: [Color; 5] = [
    Color::rgb(1.0, 0.8, 0.8),
    Color::rgb(0.8, 1.0, 0.8),
    Color::rgb(0.8, 0.8, 1.0),
    Color::rgb(1.0, 1.0, 0.8),
    Color::rgb(1.0, 0.8, 1.0),
];

/// A bright random color for a number piece.
pub fn number_piece_color(rng: &mut Rng) -> Color {
    Color::from_u8(
        rng.next_range(100, 255) as u8,
        rng.next_range(100, 255) as u8,
        rng.next_range(150, 255) as u8,
    )
}

/// A softer random color for a letter piece.
pub fn letter_piece_color(rng: &mut Rng) -> Color {
    Color::from_u8(
        rng.next_range(150, 255) as u8,
        rng.next_range(100, 200) as u8,
        rng.next_range(150, 255) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_colors_stay_bright() {
        let mut rng = Rng::new(5);
        for _ in 0..50 {
            let c = number_piece_color(&mut rng);
            assert!(c.r >= 100.0 / 255.0 - 1e-6);
            assert!(c.b >= 150.0 / 255.0 - 1e-6);
        }
    }
}
