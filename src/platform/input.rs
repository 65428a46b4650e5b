//! Keyboard event delivery
//!
//! The host pushes raw key events into an `InputHub`; interested parties
//! subscribe and receive every event until their `Subscription` is dropped.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Starts the game (space bar)
    Start,
    Other,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` / `.code` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            " " | "Space" | "Spacebar" => Key::Start,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

/// A raw key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Released,
        }
    }
}

type Handler = Arc<dyn Fn(&KeyEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    // A panicking handler never runs under the lock, so poisoning is benign
    listeners.lock().unwrap_or_else(|e| e.into_inner())
}

/// Fan-out point for raw key events
#[derive(Default)]
pub struct InputHub {
    listeners: Arc<Mutex<Listeners>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned
    /// `Subscription` is dropped.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, Arc::new(handler)));
        log::debug!("Input listener {} registered", id);
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every registered listener
    pub fn publish(&self, event: &KeyEvent) {
        // Snapshot so handlers may subscribe/unsubscribe re-entrantly
        let handlers: Vec<Handler> = lock(&self.listeners)
            .handlers
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Publish by browser key name
    pub fn publish_named(&self, name: &str, action: KeyAction) {
        self.publish(&KeyEvent {
            key: Key::from_name(name),
            action,
        });
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).handlers.len()
    }
}

/// Registration handle; unregisters its listener on drop
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).handlers.retain(|(id, _)| *id != self.id);
            log::debug!("Input listener {} released", self.id);
        }
    }
}
