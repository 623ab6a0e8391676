//! Draw-command primitives
//!
//! The simulations never touch a window or a GPU; each frame they append
//! primitives to a command list that an external renderer rasterizes in
//! order. Oriented rectangles carry their own rotation so the renderer can
//! implement them with a translate/rotate transform stack.

use glam::Vec2;

use crate::color::Rgba;

/// A single primitive for the renderer, in submission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Line segment with width
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Axis-aligned filled rectangle (top-left anchored)
    Rect { pos: Vec2, size: Vec2, color: Rgba },
    /// Rectangle outline rotated about its center
    RectOutline {
        center: Vec2,
        size: Vec2,
        rotation: f32,
        thickness: f32,
        color: Rgba,
    },
    /// HUD text at a screen position
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
}
