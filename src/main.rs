//! Vector Toys entry point
//!
//! Headless driver: runs both toys at a fixed timestep and logs their
//! progress. Presentation belongs to an external renderer consuming the
//! draw-command lists; this binary exercises the full simulation path.

use glam::Vec2;

use vector_toys::consts::REFERENCE_DT;
use vector_toys::sim::{Heartbeat, LanderToy, TickInput};
use vector_toys::{DrawCmd, Settings};

fn main() {
    env_logger::init();
    log::info!("Vector Toys (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Run seed: {}", seed);

    let screen = Vec2::new(settings.screen_width, settings.screen_height);
    let mut heartbeat = Heartbeat::new(seed, screen, settings.circle_count);
    let mut lander = LanderToy::new(seed.wrapping_add(1), screen);

    // Scripted flight: ramp the throttle for a second, then burn and roll
    let frames = 60 * 10;
    let mut cmds: Vec<DrawCmd> = Vec::new();

    for frame in 0..frames {
        let elapsed = frame as f32 * REFERENCE_DT;

        let input = TickInput {
            thrust: frame >= 60,
            throttle_up: frame < 60,
            turn_right: (120..180).contains(&frame),
            ..Default::default()
        };

        heartbeat.update(REFERENCE_DT, elapsed);
        lander.tick(&input, REFERENCE_DT);

        cmds.clear();
        heartbeat.draw(&mut cmds);
        lander.draw(&mut cmds);

        if frame % 60 == 0 {
            log::info!(
                "t={:>4.1}s progress={:.4} lander=({:>6.1}, {:>6.1}) throttle={:.1} particles={} draw_cmds={}",
                elapsed,
                heartbeat.progress,
                lander.lander.pos.x,
                lander.lander.pos.y,
                lander.lander.throttle,
                lander.particles.len(),
                cmds.len(),
            );
        }
    }

    log::info!(
        "Done: {} frames, final speed {:.1} u/s, {} live particles",
        frames,
        lander.lander.linear_vel.length(),
        lander.particles.len(),
    );
}
