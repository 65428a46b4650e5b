//! Brick Breaker entry point
//!
//! Headless native run: an autopilot feeds arrow-key events into the input
//! hub while the frame loop drives the session to Over or Clear.

use std::process::ExitCode;

use brick_breaker::platform::{InputHub, Key, KeyAction, KeyEvent};
use brick_breaker::sim::{GameEvent, GamePhase, Snapshot};
use brick_breaker::{FrameLoop, GameConfig};

/// Safety cap so a pathological config cannot spin forever
const MAX_FRAMES: u64 = 1_000_000;

/// Tracks which arrow key the autopilot is holding
#[derive(Default)]
struct Autopilot {
    held: Option<Key>,
}

impl Autopilot {
    /// Steer the paddle center toward the ball
    fn steer(&mut self, hub: &InputHub, snap: &Snapshot<'_>) {
        let center = snap.paddle.x + snap.paddle.width / 2.0;
        // Aim slightly off-center so the ball does not loop vertically
        let target = snap.ball.x + snap.paddle.width * 0.2;
        let want = if target < center - 4.0 {
            Some(Key::Left)
        } else if target > center + 4.0 {
            Some(Key::Right)
        } else {
            None
        };

        if want != self.held {
            if let Some(key) = self.held {
                hub.publish(&KeyEvent::released(key));
            }
            if let Some(key) = want {
                hub.publish(&KeyEvent::pressed(key));
            }
            self.held = want;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let hub = InputHub::new();
    let mut frame_loop = match FrameLoop::attach(&hub, config) {
        Ok(frame_loop) => frame_loop,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    hub.publish_named(" ", KeyAction::Pressed);
    hub.publish_named(" ", KeyAction::Released);

    let mut autopilot = Autopilot::default();
    let result = frame_loop.run(MAX_FRAMES, |snap, events| {
        for event in events {
            match event {
                GameEvent::GameOver { score } => println!("GAME OVER - score {}", score),
                GameEvent::Cleared { score } => println!("GAME CLEAR! - score {}", score),
                _ => {}
            }
        }
        autopilot.steer(&hub, snap);
    });

    match result {
        Ok(phase) => {
            log::info!(
                "Finished in {:?} after {} frames, score {}",
                phase,
                frame_loop.frames(),
                frame_loop.session().score()
            );
            if phase == GamePhase::Playing {
                log::warn!("Frame cap reached before the game ended");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm shell; the library is embedded by the host page
}
