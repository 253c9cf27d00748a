//! Keyboard collaborator boundary
//!
//! Physical key capture and IME handling happen outside the core; the
//! terminal only queries toggle state and polls for decoded keys.
//! Blocking line reads belong to the layer above this trait.

use serde::{Deserialize, Serialize};

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Key code of the pressed key.
    pub key_code: u16,
    /// The character the key produces, NUL for non-printing keys.
    pub character: char,
}

/// The input side of the console.
pub trait Keyboard {
    /// Whether a key press is waiting in the input stream.
    fn key_available(&self) -> bool;

    /// Whether CAPS LOCK is on.
    fn caps_lock(&self) -> bool;

    /// Whether NUM LOCK is on.
    fn number_lock(&self) -> bool;

    /// Take the next key press, if any.
    fn poll_key(&mut self) -> Option<KeyInfo>;
}

/// Keyboard that never reports input. Used headless and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessKeyboard;

impl Keyboard for HeadlessKeyboard {
    fn key_available(&self) -> bool {
        false
    }

    fn caps_lock(&self) -> bool {
        false
    }

    fn number_lock(&self) -> bool {
        false
    }

    fn poll_key(&mut self) -> Option<KeyInfo> {
        None
    }
}
