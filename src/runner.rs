//! Frame loop
//!
//! Sits outside the simulation: the host calls `frame` once per rendered
//! frame (or lets `run` drive it) and stops scheduling once the returned
//! status is `Stop`.

use std::sync::Arc;

use crate::config::{ConfigError, GameConfig};
use crate::platform::input::{InputHub, Subscription};
use crate::sim::{GameEvent, GamePhase, GameSession, InputTracker, Snapshot};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// Terminal phase reached; do not re-arm the frame callback
    Stop(GamePhase),
}

/// Session + input wiring for one run
pub struct FrameLoop {
    session: GameSession,
    tracker: Arc<InputTracker>,
    subscription: Option<Subscription>,
    frames: u64,
}

impl FrameLoop {
    /// Build an Idle session and register its input listener on `hub`
    pub fn attach(hub: &InputHub, config: GameConfig) -> Result<Self, ConfigError> {
        let session = GameSession::new(config)?;
        let tracker = Arc::new(InputTracker::new());
        let subscription = Some(tracker.bind(hub));
        Ok(Self {
            session,
            tracker,
            subscription,
            frames: 0,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn tracker(&self) -> &Arc<InputTracker> {
        &self.tracker
    }

    /// Frames run since the last reset (terminal frames excluded)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Listener still registered with the hub
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Run one frame
    pub fn frame(&mut self) -> Result<FrameStatus, ConfigError> {
        let phase = self.session.phase();
        if phase.is_terminal() {
            return Ok(FrameStatus::Stop(phase));
        }

        let input = self.tracker.tick_input();
        let phase = self.session.frame(&input)?;
        self.frames += 1;
        log::trace!("Frame {} -> {:?}", self.frames, phase);

        if phase.is_terminal() {
            Ok(FrameStatus::Stop(phase))
        } else {
            Ok(FrameStatus::Continue)
        }
    }

    /// Drive frames until a terminal phase or `max_frames`, calling `render`
    /// after each frame with the current snapshot (skipped while Idle).
    pub fn run<F>(&mut self, max_frames: u64, mut render: F) -> Result<GamePhase, ConfigError>
    where
        F: FnMut(&Snapshot<'_>, &[GameEvent]),
    {
        for _ in 0..max_frames {
            let status = self.frame()?;
            let events = self.session.drain_events();
            if let Some(snapshot) = self.session.snapshot() {
                render(&snapshot, &events);
            }
            if let FrameStatus::Stop(phase) = status {
                return Ok(phase);
            }
        }
        Ok(self.session.phase())
    }

    /// Full reinitialization: Idle session, cleared input, fresh listener
    pub fn reset(&mut self, hub: &InputHub) {
        self.subscription = None;
        self.session.reset();
        self.tracker.reset();
        self.frames = 0;
        self.subscription = Some(self.tracker.bind(hub));
    }

    /// Release the input listener without dropping the session
    pub fn detach(&mut self) {
        self.subscription = None;
    }
}
