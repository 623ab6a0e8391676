//! RGBA color value type and blend helpers
//!
//! Byte-channel colors with the small set of operations the toys need:
//! linear blend, alpha override, darken/lighten. Channel math happens in
//! normalized floats and is clamped back into byte range.

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GRAY: Rgba = Rgba::rgb(130, 130, 130);
    pub const ORANGE: Rgba = Rgba::rgb(255, 161, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from normalized float channels, clamped into byte range
    pub fn from_normalized(r: f32, g: f32, b: f32, a: f32) -> Self {
        let to_byte = |c: f32| (c * 255.0).clamp(0.0, 255.0) as u8;
        Self::new(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
    }

    /// Linear blend toward `other` at position `t`
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).clamp(0.0, 255.0) as u8;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Same color with a new alpha in [0.0, 1.0]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            a: (alpha * 255.0).clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Color scaled toward black; `amount` in [0.0, 1.0]
    pub fn darken(self, amount: f32) -> Rgba {
        Rgba::from_normalized(
            (self.r as f32 / 255.0) * (1.0 - amount),
            (self.g as f32 / 255.0) * (1.0 - amount),
            (self.b as f32 / 255.0) * (1.0 - amount),
            self.a as f32 / 255.0,
        )
    }

    /// Color scaled toward white; `amount` in [0.0, 1.0]
    pub fn lighten(self, amount: f32) -> Rgba {
        Rgba::from_normalized(
            (self.r as f32 / 255.0) * (1.0 + amount),
            (self.g as f32 / 255.0) * (1.0 + amount),
            (self.b as f32 / 255.0) * (1.0 + amount),
            self.a as f32 / 255.0,
        )
    }
}
