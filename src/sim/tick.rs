//! Per-frame simulation tick
//!
//! Advances a Playing state by exactly one frame. Velocities are in units per
//! frame; there is no delta-time scaling, so ball speed follows the host's
//! frame rate.

use super::collision::{
    hit_position, paddle_collision, paddle_deflection, past_baseline, wall_collision,
};
use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame.
///
/// Order matters: bricks, walls, paddle, baseline, paddle movement, then the
/// ball move is committed. Terminal phases are left untouched.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // --- BRICKS ---
    // Center-point test against each live brick; first hit wins
    let ball_pos = state.ball.pos;
    if let Some(index) = state
        .bricks
        .iter()
        .position(|b| b.alive && b.contains(ball_pos))
    {
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks[index].alive = false;
        state.score += state.config.brick_score;
        log::debug!("Brick {} destroyed, score {}", index, state.score);
        events.push(GameEvent::BrickDestroyed {
            index,
            score: state.score,
        });

        if state.bricks_remaining() == 0 {
            state.phase = GamePhase::Clear;
            log::info!("All bricks cleared! Final score: {}", state.score);
            events.push(GameEvent::Cleared { score: state.score });
            return;
        }
    }

    // --- WALLS ---
    let wall = wall_collision(
        state.ball.prospective(),
        state.ball.radius,
        state.config.field_width,
    );
    if wall.side {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if wall.top {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // --- PADDLE ---
    let paddle_top = state.paddle.y;
    let paddle_bottom = state.paddle.bottom();
    if paddle_collision(
        state.ball.pos,
        state.ball.vel,
        state.ball.radius,
        state.paddle.x,
        state.paddle.width,
        paddle_top,
        paddle_bottom,
    ) {
        let hit = hit_position(
            state.ball.pos.x,
            state.paddle.center_x(),
            state.paddle.width,
        );
        state.ball.vel = paddle_deflection(state.ball.vel, hit, state.config.paddle_angle_scale);
        log::trace!("Paddle hit at {:.2}, vel {:?}", hit, state.ball.vel);
    }

    // --- BASELINE ---
    if past_baseline(state.ball.pos, state.ball.radius, paddle_bottom) {
        state.phase = GamePhase::Over;
        log::info!("Ball lost! Final score: {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
        return;
    }

    // --- PADDLE MOVEMENT ---
    let max_x = state.config.paddle_max_x();
    if input.right && state.paddle.x < max_x {
        state.paddle.nudge_right(state.config.paddle_speed, max_x);
    } else if input.left && state.paddle.x > 0.0 {
        state.paddle.nudge_left(state.config.paddle_speed);
    }

    // --- COMMIT ---
    let r = state.ball.radius;
    let mut pos = state.ball.pos + state.ball.vel;
    pos.x = pos.x.clamp(r, state.config.field_width - r);
    // Bottom stays at the field edge so the baseline check still sees a loss
    pos.y = pos.y.clamp(r, state.config.field_height);
    state.ball.pos = pos;
}
