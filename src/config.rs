//! Field geometry and game balance configuration
//!
//! Loaded from JSON (missing fields fall back to the built-in constants) and
//! validated before any session is built.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::grid::GridLayout;

/// Construction-time configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("grid height {grid} exceeds field height {field}")]
    GridTooTall { grid: f32, field: f32 },
    #[error("{columns}x{rows} brick grid exceeds the {max} brick limit")]
    GridTooLarge {
        columns: usize,
        rows: usize,
        max: usize,
    },
    #[error("paddle width {paddle} exceeds field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },
    #[error("paddle band (margin {margin}, height {height}) does not fit in field height {field}")]
    PaddleOutsideField { margin: f32, height: f32, field: f32 },
    #[error("ball radius {radius} does not fit in a {width}x{height} field")]
    BallTooLarge { radius: f32, width: f32, height: f32 },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Height covered by bricks (the rest is footer)
    pub grid_height: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_score: u64,

    // === Ball ===
    pub ball_radius: f32,
    /// Spawn height measured up from the bottom of the field
    pub ball_start_offset: f32,
    /// Spawn velocity (units per frame)
    pub ball_velocity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_margin: f32,
    pub paddle_speed: f32,
    pub paddle_angle_scale: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            grid_height: GRID_HEIGHT,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_score: BRICK_SCORE,

            ball_radius: BALL_RADIUS,
            ball_start_offset: BALL_START_OFFSET,
            ball_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_speed: PADDLE_SPEED,
            paddle_angle_scale: PADDLE_ANGLE_SCALE,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every construction-time invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("grid_height", self.grid_height)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("paddle_angle_scale", self.paddle_angle_scale)?;
        if self.brick_score == 0 {
            return Err(ConfigError::NonPositive {
                field: "brick_score",
                value: 0.0,
            });
        }
        if !self.ball_velocity.is_finite() {
            return Err(ConfigError::NonPositive {
                field: "ball_velocity",
                value: self.ball_velocity.length(),
            });
        }

        if self.grid_height > self.field_height {
            return Err(ConfigError::GridTooTall {
                grid: self.grid_height,
                field: self.field_height,
            });
        }
        GridLayout::new(
            self.field_width,
            self.grid_height,
            self.brick_width,
            self.brick_height,
        )?;
        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }
        if self.paddle_bottom_margin < self.paddle_height
            || self.paddle_bottom_margin > self.field_height
        {
            return Err(ConfigError::PaddleOutsideField {
                margin: self.paddle_bottom_margin,
                height: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_radius * 2.0 >= self.field_width.min(self.field_height) {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                width: self.field_width,
                height: self.field_height,
            });
        }
        Ok(())
    }

    /// Y coordinate of the paddle's top edge
    #[inline]
    pub fn paddle_top(&self) -> f32 {
        self.field_height - self.paddle_bottom_margin
    }

    /// Y coordinate of the paddle's bottom edge (the loss baseline)
    #[inline]
    pub fn paddle_bottom(&self) -> f32 {
        self.paddle_top() + self.paddle_height
    }

    /// Rightmost legal paddle x
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_top(), 630.0);
        assert_eq!(config.paddle_bottom(), 640.0);
        assert_eq!(config.paddle_max_x(), 810.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "field_width": 800.0, "paddle_speed": 6.0 }"#)
            .expect("valid config");
        assert_eq!(config.field_width, 800.0);
        assert_eq!(config.paddle_speed, 6.0);
        assert_eq!(config.brick_width, BRICK_WIDTH);
        assert_eq!(config.ball_velocity, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let err = GameConfig::from_json(r#"{ "brick_width": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "brick_width",
                ..
            }
        ));

        let config = GameConfig {
            field_height: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_geometry_rejections() {
        let tall = GameConfig {
            grid_height: 700.0,
            ..Default::default()
        };
        assert!(matches!(tall.validate(), Err(ConfigError::GridTooTall { .. })));

        let wide = GameConfig {
            paddle_width: 1000.0,
            ..Default::default()
        };
        assert!(matches!(wide.validate(), Err(ConfigError::PaddleTooWide { .. })));

        let sunk = GameConfig {
            paddle_bottom_margin: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            sunk.validate(),
            Err(ConfigError::PaddleOutsideField { .. })
        ));

        let huge_ball = GameConfig {
            ball_radius: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            huge_ball.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_tiny_bricks_rejected() {
        let config = GameConfig {
            brick_width: 0.001,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { max: MAX_BRICKS, .. })
        ));
        assert!(crate::GameSession::new(config).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
