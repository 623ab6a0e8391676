//! Vector Toys - two small real-time 2D simulations
//!
//! Core modules:
//! - `sim`: Deterministic simulations (heartbeat interpolator, lander physics)
//! - `draw`: Draw-command primitives consumed by an external renderer
//! - `color`: RGBA color value type and blend helpers
//! - `settings`: JSON-backed preferences

pub mod color;
pub mod draw;
pub mod settings;
pub mod sim;

pub use color::Rgba;
pub use draw::DrawCmd;
pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Reference timestep the drag coefficients are tuned against (60 Hz)
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;

    /// Default screen dimensions (matches the windows the toys were built for)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Heartbeat defaults
    pub const CIRCLE_COUNT: usize = 100;
    pub const CIRCLE_RADIUS: f32 = 8.0;
    /// Maximum trail positions stored per circle
    pub const TRAIL_LENGTH: usize = 100;
    /// Widest (oldest) trail segment in pixels
    pub const TRAIL_MAX_WIDTH: f32 = 16.0;

    /// Lander defaults
    pub const LANDER_SIZE: f32 = 32.0;
    /// Gravity base; applied squared each frame
    pub const LANDER_GRAVITY: f32 = 0.98 / 5.0;
    /// Roll acceleration in radians per frame of held input
    pub const LANDER_ROLL_SPEED: f32 = std::f32::consts::PI / 128.0;
    /// Per-reference-frame velocity retention factors
    pub const LANDER_LINEAR_DRAG: f32 = 0.965;
    pub const LANDER_ANGULAR_DRAG: f32 = 0.90;

    /// Thruster particle defaults
    pub const PARTICLE_SIZE: f32 = 4.0;
    pub const PARTICLE_LIFETIME: f32 = 2.0;
    pub const PARTICLE_DRAG: f32 = 0.985;
    /// Lateral spawn jitter along the lander's rotated X axis
    pub const PARTICLE_OFFSET_MAX_X: f32 = 10.0;
    /// Maximum angular deviation of exhaust velocity (degrees)
    pub const PARTICLE_DEVIATION_DEG: f32 = 22.5;
    /// Particles younger than this never deflect off the lander body
    pub const PARTICLE_DEFLECT_MIN_AGE: f32 = 0.25;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// An angle as a unit direction vector
#[inline]
pub fn angle_to_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// A direction vector as an angle in radians
#[inline]
pub fn vec_to_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Clockwise perpendicular of a vector
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Rotate a vector about the world origin
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate a vector about an arbitrary pivot
#[inline]
pub fn rotate_around(v: Vec2, angle: f32, pivot: Vec2) -> Vec2 {
    rotate(v - pivot, angle) + pivot
}

/// True if `p` lies inside the axis-aligned box spanned by `min`/`max`
/// (corners may be given in either order)
#[inline]
pub fn in_bounds(p: Vec2, min: Vec2, max: Vec2) -> bool {
    let lo = min.min(max);
    let hi = min.max(max);
    p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
}
