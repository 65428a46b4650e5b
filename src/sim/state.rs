//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, owned by a single `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::GridLayout;
use crate::config::{ConfigError, GameConfig};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start input, no entities exist yet
    Idle,
    /// Active gameplay
    Playing,
    /// Ball passed the paddle baseline
    Over,
    /// Every brick destroyed
    Clear,
}

impl GamePhase {
    /// Over and Clear end the run; only a full reset leaves them
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Over | GamePhase::Clear)
    }
}

/// Notifications for the presentational layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session left Idle
    Started,
    /// A brick was destroyed; `score` is the running total
    BrickDestroyed { index: usize, score: u64 },
    /// Ball lost, with the final score
    GameOver { score: u64 },
    /// Last brick destroyed, with the final score
    Cleared { score: u64 },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn centered horizontally, `start_offset` above the bottom edge
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_start_offset,
            ),
            vel: config.ball_velocity,
            radius: config.ball_radius,
        }
    }

    /// Where the ball would be after one more tick
    #[inline]
    pub fn prospective(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle (fixed vertical band near the bottom)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered horizontally in its band
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: (config.field_width - config.paddle_width) / 2.0,
            y: config.paddle_top(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move right by `step`, never past `max_x`
    pub fn nudge_right(&mut self, step: f32, max_x: f32) {
        self.x = (self.x + step).min(max_x);
    }

    /// Move left by `step`, never past 0
    pub fn nudge_left(&mut self, step: f32) {
        self.x = (self.x - step).max(0.0);
    }
}

/// A brick cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    /// Cosmetic only
    pub opacity: f32,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            alive: true,
            opacity: 1.0,
        }
    }

    /// Strict interior test for a point (edges do not count)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        super::collision::point_in_rect(p, self.x, self.y, self.width, self.height)
    }
}

/// Complete state of a running session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// In grid insertion order (column-major)
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Build a fresh Playing state: ball at its spawn, paddle centered, full grid
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = GridLayout::new(
            config.field_width,
            config.grid_height,
            config.brick_width,
            config.brick_height,
        )?;
        Ok(Self {
            ball: Ball::spawn(&config),
            paddle: Paddle::centered(&config),
            bricks: layout.bricks(),
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            config,
        })
    }

    /// Number of bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Number of bricks destroyed so far
    pub fn bricks_destroyed(&self) -> usize {
        self.bricks.len() - self.bricks_remaining()
    }
}
