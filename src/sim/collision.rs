//! Collision tests and reflection rules for an axis-aligned field
//!
//! All tests are look-ahead: they take the ball's prospective position and
//! decide the bounce before the move is committed.

use glam::Vec2;

/// Strict point-in-rectangle test (points on an edge are outside)
#[inline]
pub fn point_in_rect(p: Vec2, x: f32, y: f32, width: f32, height: f32) -> bool {
    p.x > x && p.x < x + width && p.y > y && p.y < y + height
}

/// Which walls the prospective position would cross
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right wall
    pub side: bool,
    /// Top wall
    pub top: bool,
}

/// Check side and top walls for a ball of `radius` about to move to `next`
pub fn wall_collision(next: Vec2, radius: f32, field_width: f32) -> WallHit {
    WallHit {
        side: next.x > field_width - radius || next.x < radius,
        top: next.y < radius,
    }
}

/// Normalized paddle contact offset: -1 at the left edge, 0 at the center,
/// +1 at the right edge. Not clamped.
#[inline]
pub fn hit_position(ball_x: f32, paddle_center_x: f32, paddle_width: f32) -> f32 {
    (ball_x - paddle_center_x) / (paddle_width / 2.0)
}

/// Velocity after a paddle strike: always upward, horizontal speed
/// proportional to the contact offset.
#[inline]
pub fn paddle_deflection(vel: Vec2, hit_position: f32, angle_scale: f32) -> Vec2 {
    Vec2::new(hit_position * angle_scale, -vel.y.abs())
}

/// Paddle strike test.
///
/// The ball's prospective bottom edge must enter below the paddle top while
/// its center is still above the paddle bottom, and its center must lie
/// strictly within the paddle's horizontal span.
pub fn paddle_collision(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    paddle_x: f32,
    paddle_width: f32,
    paddle_top: f32,
    paddle_bottom: f32,
) -> bool {
    let prospective_bottom = pos.y + radius + vel.y;
    prospective_bottom > paddle_top
        && pos.y < paddle_bottom
        && pos.x > paddle_x
        && pos.x < paddle_x + paddle_width
}

/// Ball has fallen past the paddle plane
#[inline]
pub fn past_baseline(pos: Vec2, radius: f32, paddle_bottom: f32) -> bool {
    pos.y + radius > paddle_bottom
}
