//! Heartbeat interpolator
//!
//! A fixed number of circles drift between successive random point sets,
//! each dragging a bounded trail of past positions. Colors come from a
//! position-and-phase hash, not randomness, so two runs with the same seed
//! render identically.

use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::{Quat, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Rgba;
use crate::consts::*;
use crate::draw::DrawCmd;

/// Deterministic color for a screen position at a palette phase
///
/// Two basis vectors built from the normalized screen fraction are each
/// rotated by the phase around an axis picked by the phase's sign, then
/// blended by the phase. Channels clamp into byte range.
pub fn color_at(pos: Vec2, phase: f32, screen: Vec2) -> Rgba {
    let v1 = Vec3::new(pos.x / screen.x, 0.0, 0.0);
    let v2 = Vec3::new(0.0, pos.y / screen.y, 0.0);
    let axis1 = if phase > 0.0 { Vec3::X } else { Vec3::Y };
    let axis2 = if phase > 0.0 { Vec3::Z } else { Vec3::X };
    let c1 = Quat::from_axis_angle(axis1, phase) * v1;
    let c2 = Quat::from_axis_angle(axis2, phase) * v2;
    let c = c1.lerp(c2, phase);
    Rgba::from_normalized(c.x, c.y, c.z, 1.0)
}

/// The heartbeat toy state
#[derive(Debug, Clone)]
pub struct Heartbeat {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Render target size in pixels
    pub screen: Vec2,
    /// Set being interpolated away from
    pub old_points: Vec<Vec2>,
    /// Set being interpolated toward; replaced wholesale on swap
    pub new_points: Vec<Vec2>,
    /// Interpolated position per circle, as of the last update
    pub current: Vec<Vec2>,
    /// Bounded position history per circle, oldest first
    pub trails: Vec<VecDeque<Vec2>>,
    /// Interpolation progress; swaps and resets to 0 on crossing 1.0
    pub progress: f32,
    /// Palette phase fed to [`color_at`], refreshed at each swap
    pub phase: f32,
    rng: Pcg32,
}

impl Heartbeat {
    pub fn new(seed: u64, screen: Vec2, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let old_points = generate_points(&mut rng, screen, count);
        let new_points = generate_points(&mut rng, screen, count);
        Self {
            seed,
            screen,
            current: old_points.clone(),
            old_points,
            new_points,
            trails: vec![VecDeque::with_capacity(TRAIL_LENGTH); count],
            progress: 0.0,
            phase: 0.0,
            rng,
        }
    }

    /// Position of circle `i` at the current progress
    pub fn interpolated(&self, i: usize) -> Vec2 {
        self.old_points[i].lerp(self.new_points[i], self.progress)
    }

    /// Advance one frame; `elapsed_secs` is wall time since startup
    pub fn update(&mut self, dt: f32, elapsed_secs: f32) {
        for i in 0..self.old_points.len() {
            let pos = self.interpolated(i);
            self.current[i] = pos;

            let trail = &mut self.trails[i];
            trail.push_back(pos);
            if trail.len() > TRAIL_LENGTH {
                trail.pop_front();
            }
        }

        // Deliberate throttle: dt/100 through a sine, not a linear timer
        self.progress += (dt / 100.0).sin();

        if self.progress >= 1.0 {
            self.phase = elapsed_secs.sin() * PI;
            std::mem::swap(&mut self.old_points, &mut self.new_points);
            self.new_points = generate_points(&mut self.rng, self.screen, self.old_points.len());
            self.progress = 0.0;
        }
    }

    /// Append this frame's primitives: fading trails first, circles on top
    pub fn draw(&self, out: &mut Vec<DrawCmd>) {
        for (i, trail) in self.trails.iter().enumerate() {
            for c in 1..trail.len() {
                let a = trail[c - 1];
                let b = trail[c];
                let blended =
                    color_at(a, self.phase, self.screen).lerp(color_at(b, self.phase, self.screen), 0.5);
                let alpha = c as f32 / trail.len() as f32;
                out.push(DrawCmd::Line {
                    from: a,
                    to: b,
                    width: TRAIL_MAX_WIDTH * alpha,
                    color: blended.with_alpha(alpha),
                });
            }
            out.push(DrawCmd::Circle {
                center: self.current[i],
                radius: CIRCLE_RADIUS,
                color: color_at(self.current[i], self.phase, self.screen),
            });
        }
    }
}

/// A fresh random point set with integer pixel coordinates inside the screen
fn generate_points(rng: &mut Pcg32, screen: Vec2, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..(screen.x as i32).max(1));
            let y = rng.random_range(0..(screen.y as i32).max(1));
            Vec2::new(x as f32, y as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 480.0);

    #[test]
    fn test_interpolation_endpoints() {
        let mut hb = Heartbeat::new(1, SCREEN, 10);
        hb.progress = 0.0;
        for i in 0..10 {
            assert!((hb.interpolated(i) - hb.old_points[i]).length() < 1e-5);
        }
        hb.progress = 1.0;
        for i in 0..10 {
            assert!((hb.interpolated(i) - hb.new_points[i]).length() < 1e-5);
        }
    }

    #[test]
    fn test_trail_capped_fifo() {
        let mut hb = Heartbeat::new(2, SCREEN, 1);
        // Freeze interpolation targets so the trail records distinct points
        for frame in 0..(TRAIL_LENGTH + 50) {
            hb.old_points[0] = Vec2::new(frame as f32, 0.0);
            hb.new_points[0] = hb.old_points[0];
            hb.progress = 0.0;
            hb.update(1.0 / 60.0, 0.0);
        }
        let trail = &hb.trails[0];
        assert_eq!(trail.len(), TRAIL_LENGTH);
        // Oldest entries evicted: front is frame 50, back is the last frame
        assert_eq!(trail.front().unwrap().x, 50.0);
        assert_eq!(trail.back().unwrap().x, (TRAIL_LENGTH + 50 - 1) as f32);
    }

    #[test]
    fn test_progress_accumulates_sin_dt() {
        let mut hb = Heartbeat::new(3, SCREEN, 4);
        let dt = 1.0 / 60.0;
        hb.update(dt, 0.0);
        assert!((hb.progress - (dt / 100.0).sin()).abs() < 1e-9);
    }

    #[test]
    fn test_swap_only_when_crossing_one() {
        let mut hb = Heartbeat::new(4, SCREEN, 4);
        let dt = 1.0 / 60.0;
        let step = (dt / 100.0_f32).sin();
        let first_target = hb.new_points.clone();

        let mut sum = 0.0_f32;
        let mut swapped_at = None;
        for frame in 0..10_000 {
            hb.update(dt, frame as f32 * dt);
            sum += step;
            if hb.old_points == first_target {
                swapped_at = Some((frame, sum));
                break;
            }
            assert!(sum < 1.0, "swap should have fired once sum crossed 1.0");
        }

        let (_, sum_at_swap) = swapped_at.expect("swap never happened");
        assert!(sum_at_swap >= 1.0);
        // Progress resets to exactly zero on the swap frame
        assert_eq!(hb.progress, 0.0);
        assert_ne!(hb.new_points, first_target);
    }

    #[test]
    fn test_swap_sets_phase_from_elapsed_time() {
        let mut hb = Heartbeat::new(5, SCREEN, 4);
        hb.progress = 1.5;
        hb.update(1.0 / 60.0, 2.0);
        assert!((hb.phase - 2.0_f32.sin() * PI).abs() < 1e-5);
    }

    #[test]
    fn test_color_at_deterministic_and_sign_switches_axes() {
        let pos = Vec2::new(400.0, 240.0);
        let a = color_at(pos, 1.3, SCREEN);
        let b = color_at(pos, 1.3, SCREEN);
        assert_eq!(a, b);
        // Opposite-sign phases pick different rotation axes
        assert_ne!(color_at(pos, 1.3, SCREEN), color_at(pos, -1.3, SCREEN));
    }

    #[test]
    fn test_draw_trail_widths_scale_with_index() {
        let mut hb = Heartbeat::new(6, SCREEN, 1);
        for _ in 0..5 {
            hb.update(1.0 / 60.0, 0.0);
        }
        let mut cmds = Vec::new();
        hb.draw(&mut cmds);

        let widths: Vec<f32> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 4);
        let len = hb.trails[0].len() as f32;
        for (k, w) in widths.iter().enumerate() {
            let alpha = (k + 1) as f32 / len;
            assert!((w - TRAIL_MAX_WIDTH * alpha).abs() < 1e-5);
        }
        // Circle drawn on top of its trail
        assert!(matches!(cmds.last(), Some(DrawCmd::Circle { .. })));
    }

    #[test]
    fn test_empty_trail_draws_no_segments() {
        let hb = Heartbeat::new(7, SCREEN, 3);
        let mut cmds = Vec::new();
        hb.draw(&mut cmds);
        // No updates yet: circles only, no trail lines
        assert_eq!(cmds.len(), 3);
        assert!(cmds.iter().all(|c| matches!(c, DrawCmd::Circle { .. })));
    }

    #[test]
    fn test_determinism() {
        let mut a = Heartbeat::new(99, SCREEN, 20);
        let mut b = Heartbeat::new(99, SCREEN, 20);
        for frame in 0..500 {
            let t = frame as f32 / 60.0;
            a.update(1.0 / 60.0, t);
            b.update(1.0 / 60.0, t);
        }
        assert_eq!(a.current, b.current);
        assert_eq!(a.new_points, b.new_points);
    }
}
