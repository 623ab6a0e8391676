//! Lander body integrator
//!
//! A single rigid body under gravity, player thrust, roll input and
//! exponential drag. The drag factors are tuned against a 60 Hz frame and
//! compensated by `dt / REFERENCE_DT` so the feel survives any frame rate.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::{Particle, spawn_thruster_particle, step_particle};
use crate::color::Rgba;
use crate::consts::*;
use crate::draw::DrawCmd;
use crate::angle_to_vec;

/// Input flags for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust key held (engine firing at the current throttle)
    pub thrust: bool,
    /// Raise the throttle level
    pub throttle_up: bool,
    /// Lower the throttle level
    pub throttle_down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Restore the starting state and clear all particles
    pub reset: bool,
}

/// The lander rigid body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lander {
    /// Local axis-aligned bounds size; the rect is anchored at `pos`
    pub bounds: Vec2,
    /// World position of the rect's top-left corner
    pub pos: Vec2,
    /// Orientation in radians; 0 points the nose up
    pub orientation: f32,
    pub linear_vel: Vec2,
    pub angular_vel: f32,
    /// Engine power level, adjusted separately from the thrust key; never negative
    pub throttle: f32,
}

impl Lander {
    /// Fixed starting state: centered horizontally at the top of the screen
    pub fn initial(screen_width: f32) -> Self {
        let bounds = Vec2::splat(LANDER_SIZE);
        Self {
            bounds,
            pos: Vec2::new(screen_width / 2.0 - bounds.x, 0.0),
            orientation: 0.0,
            linear_vel: Vec2::ZERO,
            angular_vel: 0.0,
            throttle: 0.0,
        }
    }

    /// Forward (nose) direction
    pub fn forward(&self) -> Vec2 {
        angle_to_vec(self.orientation - FRAC_PI_2)
    }

    /// World-space bounding box, rotation deliberately ignored
    pub fn aabb(&self) -> (Vec2, Vec2) {
        (self.pos, self.pos + self.bounds)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.bounds / 2.0
    }
}

/// The lander toy: one body plus its exhaust particles
#[derive(Debug, Clone)]
pub struct LanderToy {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Render target size in pixels
    pub screen: Vec2,
    pub lander: Lander,
    pub particles: Vec<Particle>,
    rng: Pcg32,
}

impl LanderToy {
    pub fn new(seed: u64, screen: Vec2) -> Self {
        Self {
            seed,
            screen,
            lander: Lander::initial(screen.x),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restore the starting body state and drop every particle
    pub fn reset(&mut self) {
        self.lander = Lander::initial(self.screen.x);
        self.particles.clear();
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if input.reset {
            self.reset();
        }
        self.update_lander(input, dt);
        self.update_particles(dt);
    }

    fn update_lander(&mut self, input: &TickInput, dt: f32) {
        // Throttle is sampled before this frame's adjustment
        let power = self.lander.throttle;
        let thrust = if input.thrust { 1.0 } else { 0.0 };
        let turn = (input.turn_right as i32 - input.turn_left as i32) as f32;
        let throttle_adjust = (input.throttle_up as i32 - input.throttle_down as i32) as f32;

        // Forward before roll integration; exhaust uses this same direction
        let forward = self.lander.forward();

        self.lander.linear_vel += Vec2::Y * (LANDER_GRAVITY * LANDER_GRAVITY);
        self.lander.linear_vel += forward * thrust * power;
        self.lander.angular_vel += turn * LANDER_ROLL_SPEED;

        self.lander.linear_vel *= LANDER_LINEAR_DRAG.powf(dt / REFERENCE_DT);
        self.lander.angular_vel *= LANDER_ANGULAR_DRAG.powf(dt / REFERENCE_DT);

        self.lander.pos += self.lander.linear_vel * dt;
        self.lander.orientation += self.lander.angular_vel * dt;
        self.lander.throttle = (self.lander.throttle + throttle_adjust * dt).max(0.0);

        if thrust != 0.0 && power > 0.0 {
            let amount = (thrust * power * 4.0).max(1.0) as usize;
            for _ in 0..amount {
                let p = spawn_thruster_particle(&self.lander, forward, &mut self.rng);
                self.particles.push(p);
            }
        }
    }

    fn update_particles(&mut self, dt: f32) {
        for p in &mut self.particles {
            step_particle(p, &self.lander, self.screen, dt);
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }

    /// Append this frame's primitives: body outline, HUD readout, particles
    pub fn draw(&self, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::RectOutline {
            center: self.lander.center(),
            size: self.lander.bounds,
            rotation: self.lander.orientation,
            thickness: 4.0,
            color: Rgba::GRAY,
        });

        let hud = [
            format!(" - Position: {:.1}, {:.1}", self.lander.pos.x, self.lander.pos.y),
            format!(" - Orientation: {:.3}", self.lander.orientation),
            format!(" - Velocity: {:.1} u/s", self.lander.linear_vel.length()),
            format!(" - Thrust: {:.1} u/s", self.lander.throttle),
        ];
        for (i, line) in hud.into_iter().enumerate() {
            out.push(DrawCmd::Text {
                text: line,
                pos: Vec2::new(12.0, 32.0 + 20.0 * i as f32),
                size: 20.0,
                color: Rgba::BLACK,
            });
        }

        for p in &self.particles {
            out.push(DrawCmd::Rect {
                pos: p.pos,
                size: Vec2::splat(p.size),
                color: p.color,
            });
        }
    }
}
