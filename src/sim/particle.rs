//! Thruster particle spawn, motion and removal
//!
//! Particles live in an unordered growable collection owned by the lander
//! toy. Each one fades from its spawn color to dark/transparent over a fixed
//! lifetime, bounces off screen edges, and gets crudely deflected when it
//! drifts back inside the lander's bounding box.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::lander::Lander;
use crate::color::Rgba;
use crate::consts::*;
use crate::{angle_to_vec, in_bounds, perpendicular, rotate, rotate_around};

/// A single exhaust particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in seconds; the particle dies at zero
    pub lifetime: f32,
    /// Lifetime it spawned with, immutable
    pub total_lifetime: f32,
    /// Side length in pixels, immutable
    pub size: f32,
    /// Current faded color
    pub color: Rgba,
    /// Color it spawned with, immutable
    pub initial_color: Rgba,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, lifetime: f32, size: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            lifetime,
            total_lifetime: lifetime,
            size,
            color,
            initial_color: color,
        }
    }

    /// Fraction of lifetime remaining, 1.0 at spawn down to 0.0
    pub fn life_fraction(&self) -> f32 {
        self.lifetime / self.total_lifetime
    }

    /// Seconds since spawn
    pub fn age(&self) -> f32 {
        self.total_lifetime - self.lifetime
    }
}

/// Spawn one exhaust particle at the lander's nozzle
///
/// `accurate_forward` is the forward direction sampled before this frame's
/// roll was integrated, so exhaust lines up with the thrust actually applied.
pub fn spawn_thruster_particle(lander: &Lander, accurate_forward: Vec2, rng: &mut Pcg32) -> Particle {
    let speed = lander.linear_vel.length();

    let jitter = rotate(Vec2::X * PARTICLE_OFFSET_MAX_X, lander.orientation)
        * ((rng.random::<f32>() - 0.5) * 2.0);
    let nozzle = rotate_around(
        Vec2::new(lander.bounds.x * 0.5, lander.bounds.y),
        lander.orientation,
        lander.bounds / 2.0,
    );
    let pos = lander.pos + jitter + nozzle;

    let deviation = ((rng.random::<f32>() - 0.5) * 2.0) * PARTICLE_DEVIATION_DEG.to_radians();
    let vel = -rotate(accurate_forward, deviation) * speed * 2.0;

    Particle::new(pos, vel, PARTICLE_LIFETIME, PARTICLE_SIZE, Rgba::ORANGE)
}

/// Advance one particle by `dt` against the current lander and screen
pub fn step_particle(p: &mut Particle, lander: &Lander, screen: Vec2, dt: f32) {
    let t = p.life_fraction();
    p.color = p.initial_color.darken((1.0 - t) * 0.75).with_alpha(t);
    p.pos += p.vel * dt;
    p.lifetime -= dt;

    p.vel *= PARTICLE_DRAG.powf(dt / REFERENCE_DT);

    if !in_bounds(p.pos, Vec2::ZERO, screen) {
        if p.pos.x > screen.x || p.pos.x < 0.0 {
            p.vel.x *= -1.0;
        } else if p.pos.y > screen.y || p.pos.y < 0.0 {
            p.vel.y *= -1.0;
        }
    }

    // Box check deliberately ignores the lander's rotation; the grace period
    // keeps freshly spawned exhaust from dying inside the nozzle
    let (box_min, box_max) = lander.aabb();
    if p.age() > PARTICLE_DEFLECT_MIN_AGE && in_bounds(p.pos, box_min, box_max) {
        let n = p.vel.normalize_or_zero();
        let facing = angle_to_vec(lander.orientation);

        let to_forward = (facing - n).normalize_or_zero();
        let to_left = (perpendicular(facing) - n).normalize_or_zero();
        let to_backward = -to_forward;
        let to_right = -to_left;

        if p.pos.x < box_max.x && p.pos.x > box_min.x {
            p.vel.x *= to_left.dot(n).min(to_right.dot(n));
        }
        if p.pos.y < box_max.y && p.pos.y > box_min.y {
            p.vel.y *= to_forward.dot(n).min(to_backward.dot(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;

    const SCREEN: Vec2 = Vec2::new(800.0, 480.0);

    fn far_lander() -> Lander {
        // Parked far outside any particle path used in these tests
        let mut lander = Lander::initial(10_000.0);
        lander.pos = Vec2::new(10_000.0, 10_000.0);
        lander
    }

    #[test]
    fn test_lifetime_counts_down_and_expires() {
        let lander = far_lander();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0, 4.0, Rgba::ORANGE);

        for expected in [1.5_f32, 1.0, 0.5, 0.0] {
            assert!(p.lifetime > 0.0, "still alive before the 4th update");
            step_particle(&mut p, &lander, SCREEN, 0.5);
            assert!((p.lifetime - expected).abs() < 1e-6);
        }
        assert!(p.lifetime <= 0.0, "removed exactly after the 4th update");
    }

    #[test]
    fn test_right_wall_bounce_inverts_x_only() {
        let lander = far_lander();
        let mut p = Particle::new(
            Vec2::new(SCREEN.x - 1.0, 200.0),
            Vec2::new(10.0, 0.0),
            2.0,
            4.0,
            Rgba::ORANGE,
        );
        // One second step carries the particle past the right edge
        step_particle(&mut p, &lander, SCREEN, 1.0);
        assert!(p.vel.x < 0.0, "x velocity inverted");
        let drag = PARTICLE_DRAG.powf(1.0 / REFERENCE_DT);
        assert!((p.vel.x + 10.0 * drag).abs() < 1e-4);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_fade_tracks_life_fraction() {
        let lander = far_lander();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0, 4.0, Rgba::ORANGE);
        step_particle(&mut p, &lander, SCREEN, 0.0);
        // Full lifetime: undimmed (within byte/float round-tripping), fully opaque
        assert_eq!(p.color.a, 255);
        assert_eq!(p.color.r, 255);
        assert!((p.color.g as i32 - 161).abs() <= 1);
        assert_eq!(p.color.b, 0);

        p.lifetime = 1.0;
        step_particle(&mut p, &lander, SCREEN, 0.0);
        let expected = Rgba::ORANGE.darken(0.5 * 0.75).with_alpha(0.5);
        assert_eq!(p.color, expected);
        assert!(p.color.a < 255);
    }

    #[test]
    fn test_drag_slows_particle() {
        let lander = far_lander();
        let mut p = Particle::new(
            Vec2::new(400.0, 240.0),
            Vec2::new(60.0, 0.0),
            2.0,
            4.0,
            Rgba::ORANGE,
        );
        step_particle(&mut p, &lander, SCREEN, REFERENCE_DT);
        assert!((p.vel.x - 60.0 * PARTICLE_DRAG).abs() < 1e-4);
    }

    #[test]
    fn test_young_particles_skip_lander_deflection() {
        let mut lander = Lander::initial(SCREEN.x);
        lander.pos = Vec2::new(100.0, 100.0);
        let inside = Vec2::new(110.0, 110.0);

        let mut young = Particle::new(inside, Vec2::new(5.0, 0.0), 2.0, 4.0, Rgba::ORANGE);
        step_particle(&mut young, &lander, SCREEN, 0.0);
        assert_eq!(young.vel, Vec2::new(5.0, 0.0));

        let mut old = Particle::new(inside, Vec2::new(5.0, 0.0), 2.0, 4.0, Rgba::ORANGE);
        old.lifetime = 1.0; // age 1.0s, past the grace period
        step_particle(&mut old, &lander, SCREEN, 0.0);
        assert_ne!(old.vel, Vec2::new(5.0, 0.0));
        // Attenuated or redirected, never amplified
        assert!(old.vel.x.abs() <= 5.0 + 1e-4);
    }

    #[test]
    fn test_spawn_speed_scales_with_lander_speed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut lander = Lander::initial(SCREEN.x);
        lander.linear_vel = Vec2::new(3.0, 4.0); // speed 5

        let p = spawn_thruster_particle(&lander, angle_to_vec(-std::f32::consts::FRAC_PI_2), &mut rng);
        assert!((p.vel.length() - 10.0).abs() < 1e-4);
        assert_eq!(p.lifetime, PARTICLE_LIFETIME);
        assert_eq!(p.size, PARTICLE_SIZE);
        assert_eq!(p.initial_color, Rgba::ORANGE);
        // Exhaust points opposite the forward direction, within the cone
        assert!(p.vel.y > 0.0);
    }
}
