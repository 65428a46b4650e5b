//! Brick Breaker - A single-screen Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, physics, collisions, game session)
//! - `config`: Data-driven field and balance configuration
//! - `platform`: Input event delivery and listener lifecycles
//! - `runner`: Frame loop that drives the session once per rendered frame

pub mod config;
pub mod platform;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use runner::{FrameLoop, FrameStatus};
pub use sim::{GameEvent, GamePhase, GameSession, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (canvas size)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Height covered by the brick grid; the strip below is the score footer
    pub const GRID_HEIGHT: f32 = 540.0;

    /// Brick cell size (12 columns x 15 rows on the default field)
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 36.0;
    /// Upper bound on grid cells a config may produce
    pub const MAX_BRICKS: usize = 65_536;
    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball spawns this far above the bottom of the field
    pub const BALL_START_OFFSET: f32 = 30.0;
    /// Initial velocity in units per frame
    pub const BALL_START_DX: f32 = 3.0;
    pub const BALL_START_DY: f32 = -3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the bottom of the field to the paddle's top edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Paddle movement per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Horizontal speed given to a ball striking the paddle's extreme edge
    pub const PADDLE_ANGLE_SCALE: f32 = 8.0;
}
