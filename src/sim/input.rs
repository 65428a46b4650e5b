//! Keyboard intent tracking
//!
//! Turns press/release events into the two held-direction flags plus a
//! one-shot start latch. Flags are atomics so events may be delivered from
//! any thread holding an `Arc<InputTracker>`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::platform::input::{InputHub, Key, KeyAction, KeyEvent, Subscription};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right (wins if both are held)
    pub right: bool,
    /// Start requested this frame
    pub start: bool,
}

/// Held-key state for the paddle plus the start latch
#[derive(Debug, Default)]
pub struct InputTracker {
    left: AtomicBool,
    right: AtomicBool,
    start_pending: AtomicBool,
    start_fired: AtomicBool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw key event
    pub fn handle(&self, event: &KeyEvent) {
        match (event.key, event.action) {
            (Key::Left, KeyAction::Pressed) => self.left.store(true, Ordering::Relaxed),
            (Key::Left, KeyAction::Released) => self.left.store(false, Ordering::Relaxed),
            (Key::Right, KeyAction::Pressed) => self.right.store(true, Ordering::Relaxed),
            (Key::Right, KeyAction::Released) => self.right.store(false, Ordering::Relaxed),
            (Key::Start, KeyAction::Pressed) => self.request_start(),
            _ => {}
        }
    }

    /// Arm the start latch unless it has already fired
    pub fn request_start(&self) {
        if !self.start_fired.load(Ordering::Relaxed) {
            self.start_pending.store(true, Ordering::Relaxed);
        }
    }

    /// Consume the start latch; true at most once until `reset`
    pub fn take_start(&self) -> bool {
        if self.start_pending.swap(false, Ordering::Relaxed) {
            !self.start_fired.swap(true, Ordering::Relaxed)
        } else {
            false
        }
    }

    pub fn left_held(&self) -> bool {
        self.left.load(Ordering::Relaxed)
    }

    pub fn right_held(&self) -> bool {
        self.right.load(Ordering::Relaxed)
    }

    /// Read the flags for one tick, consuming the start latch
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_held(),
            right: self.right_held(),
            start: self.take_start(),
        }
    }

    /// Clear every flag and re-arm start (full session reset)
    pub fn reset(&self) {
        self.left.store(false, Ordering::Relaxed);
        self.right.store(false, Ordering::Relaxed);
        self.start_pending.store(false, Ordering::Relaxed);
        self.start_fired.store(false, Ordering::Relaxed);
    }

    /// Register this tracker as a listener on `hub`; dropping the returned
    /// subscription detaches it.
    pub fn bind(self: &Arc<Self>, hub: &InputHub) -> Subscription {
        let tracker = Arc::clone(self);
        hub.subscribe(move |event| tracker.handle(event))
    }
}
