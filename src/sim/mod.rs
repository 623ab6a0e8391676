//! Deterministic simulation module
//!
//! All toy logic lives here. This module must be pure and deterministic:
//! - Caller-provided delta time only
//! - Seeded RNG only
//! - No rendering or platform dependencies (output is a draw-command list)

pub mod heartbeat;
pub mod lander;
pub mod particle;

pub use heartbeat::{Heartbeat, color_at};
pub use lander::{Lander, LanderToy, TickInput};
pub use particle::Particle;
