//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no delta-time scaling
//! - No randomness
//! - Stable iteration order (grid insertion order)
//! - No rendering or platform dependencies beyond input events

pub mod collision;
pub mod grid;
pub mod input;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{WallHit, hit_position, paddle_deflection, point_in_rect, wall_collision};
pub use grid::GridLayout;
pub use input::{InputTracker, TickInput};
pub use session::{BallView, GameSession, PaddleView, Snapshot};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle};
pub use tick::tick;
