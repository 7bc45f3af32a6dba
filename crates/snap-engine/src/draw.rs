//! Per-frame draw-command buffer.
//!
//! The engine is headless: scenes append primitive paint commands to a
//! [`DrawList`] each frame, and the host's drawing backend replays them in
//! order against a surface of fixed pixel dimensions. The list is cleared
//! and rebuilt every frame.

use glam::Vec2;

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Brighten each channel by a factor (used for gradient top stops).
    pub fn lighten(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).min(1.0),
            g: (self.g * factor).min(1.0),
            b: (self.b * factor).min(1.0),
            a: self.a,
        }
    }
}

/// Vertical two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top: Color,
    pub bottom: Color,
}

impl Gradient {
    pub fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }

    /// The standard widget gradient: a lightened color on top fading into
    /// the base color.
    pub fn sheen(base: Color) -> Self {
        Self {
            top: base.lighten(1.2),
            bottom: base,
        }
    }
}

/// Fill style for rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Vertical(Gradient),
}

/// Outline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Horizontal text alignment relative to the baseline position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A primitive paint command. Positions are top-left corners unless noted.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface.
    Clear { color: Color },
    /// Axis-aligned rectangle (gradients and translucent overlays).
    Rect { pos: Vec2, size: Vec2, paint: Paint },
    /// Rounded rectangle, optionally stroked, scaled and rotated about its
    /// own center (how dragged pieces and pressed buttons are transformed).
    RoundedRect {
        pos: Vec2,
        size: Vec2,
        radius: f32,
        paint: Paint,
        stroke: Option<Stroke>,
        scale: f32,
        rotation: f32,
    },
    /// Dashed rectangle outline (target slots).
    DashedRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    /// Filled circle (background particles).
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text drawn at a baseline position.
    Text {
        text: String,
        baseline: Vec2,
        size: f32,
        color: Color,
        align: Align,
    },
}

/// Ordered command buffer, rebuilt each frame.
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            cmds: Vec::with_capacity(128),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Text with a drop shadow two units down-right, the standard title and
    /// label treatment.
    pub fn push_shadowed_text(
        &mut self,
        text: &str,
        baseline: Vec2,
        size: f32,
        color: Color,
        align: Align,
    ) {
        self.push(DrawCmd::Text {
            text: text.to_string(),
            baseline: baseline + Vec2::splat(2.0),
            size,
            color: Color::BLACK.with_alpha(0.5),
            align,
        });
        self.push(DrawCmd::Text {
            text: text.to_string(),
            baseline,
            size,
            color,
            align,
        });
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
