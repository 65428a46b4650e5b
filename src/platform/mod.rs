//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events and listener registration

pub mod input;

pub use input::{InputHub, Key, KeyAction, KeyEvent, Subscription};
