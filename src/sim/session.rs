//! Game session: phase state machine and entity ownership
//!
//! Idle sessions hold no entities. The start input builds a fresh
//! `GameState`; terminal phases are only left through `reset`.

use serde::Serialize;

use super::input::TickInput;
use super::state::{Brick, GameEvent, GamePhase, GameState};
use super::tick::tick;
use crate::config::{ConfigError, GameConfig};

/// Read-only ball view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Read-only paddle view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// Per-frame view handed to the rendering layer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub ball: BallView,
    pub paddle: PaddleView,
    pub bricks: &'a [Brick],
    pub score: u64,
    pub phase: GamePhase,
}

impl Snapshot<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Owns the config, the current phase and (once started) the game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: Option<GameState>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Validates the config up front so a bad setup fails before play
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.state.as_ref().map_or(GamePhase::Idle, |s| s.phase)
    }

    pub fn score(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.score)
    }

    /// Running state, if the session has started
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Idle -> Playing. Returns false (and does nothing) if already started.
    pub fn start(&mut self) -> Result<bool, ConfigError> {
        if self.state.is_some() {
            log::debug!("Start ignored in phase {:?}", self.phase());
            return Ok(false);
        }
        let state = GameState::new(self.config.clone())?;
        log::info!(
            "Game started: {} bricks on a {}x{} field",
            state.bricks.len(),
            self.config.field_width,
            self.config.field_height
        );
        self.state = Some(state);
        self.events.push(GameEvent::Started);
        Ok(true)
    }

    /// One rendered frame: honor a start request while Idle, then tick once
    /// if Playing. Returns the phase after the frame.
    pub fn frame(&mut self, input: &TickInput) -> Result<GamePhase, ConfigError> {
        if input.start {
            self.start()?;
        }
        if let Some(state) = self.state.as_mut()
            && state.phase == GamePhase::Playing
        {
            tick(state, input, &mut self.events);
        }
        Ok(self.phase())
    }

    /// Discard all entities and return to Idle
    pub fn reset(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!(
                "Session reset from {:?} (score {})",
                state.phase,
                state.score
            );
        }
        self.events.clear();
    }

    /// Events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for rendering; `None` while Idle
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.state.as_ref().map(|s| Snapshot {
            ball: BallView {
                x: s.ball.pos.x,
                y: s.ball.pos.y,
                radius: s.ball.radius,
            },
            paddle: PaddleView {
                x: s.paddle.x,
                width: s.paddle.width,
                height: s.paddle.height,
            },
            bricks: &s.bricks,
            score: s.score,
            phase: s.phase,
        })
    }

    /// Mutable access for hosts and tests that stage a position
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default()).expect("default config")
    }

    #[test]
    fn test_idle_has_no_entities() {
        let mut s = session();
        assert_eq!(s.phase(), GamePhase::Idle);
        assert!(s.snapshot().is_none());

        // Frames without start stay Idle
        let phase = s.frame(&TickInput::default()).unwrap();
        assert_eq!(phase, GamePhase::Idle);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_start_and_tick_same_frame() {
        let mut s = session();
        let phase = s
            .frame(&TickInput {
                start: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(phase, GamePhase::Playing);
        assert_eq!(s.drain_events(), vec![GameEvent::Started]);

        let snap = s.snapshot().expect("playing");
        assert_eq!(snap.bricks.len(), 180);
        assert_eq!((snap.ball.x, snap.ball.y), (483.0, 607.0));
        assert_eq!(snap.paddle.width, 150.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut s = session();
        assert!(s.start().unwrap());
        s.state_mut().unwrap().score = 20;
        assert!(!s.start().unwrap());
        assert_eq!(s.score(), 20);
        assert_eq!(s.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut s = session();
        s.start().unwrap();
        s.state_mut().unwrap().phase = GamePhase::Over;
        s.reset();
        assert_eq!(s.phase(), GamePhase::Idle);
        assert!(s.snapshot().is_none());

        assert!(s.start().unwrap());
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_frame_skips_terminal_state() {
        let mut s = session();
        s.start().unwrap();
        s.state_mut().unwrap().phase = GamePhase::Clear;
        let before = s.state().cloned();

        let phase = s
            .frame(&TickInput {
                right: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(phase, GamePhase::Clear);
        assert_eq!(s.state().cloned(), before);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = GameConfig {
            brick_height: -5.0,
            ..Default::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let mut s = session();
        s.start().unwrap();
        let json = s.snapshot().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["score"], 0);
        assert_eq!(value["bricks"].as_array().unwrap().len(), 180);
        assert_eq!(value["bricks"][0]["alive"], true);
        assert_eq!(value["ball"]["radius"], 8.0);
    }
}
