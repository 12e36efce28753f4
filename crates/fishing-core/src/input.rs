//! Input abstraction.
//!
//! Controllers never see raw window events. They consume boolean predicates
//! from an [`InputSource`], which the host fills once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Launch the lure (R).
    Cast,
    /// Reel the lure back to the caster (E).
    Cancel,
    /// Stop the minigame marker (Space).
    Reel,
    /// Toggle pause (Escape).
    Pause,
    /// Confirm a pause menu choice (Enter).
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Per-frame input predicates.
pub trait InputSource {
    /// Key is held this frame.
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went from up to down this frame.
    fn is_key_press_edge(&self, key: Key) -> bool;
    /// Mouse button is held this frame.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;
}

/// Frame-latched keyboard and mouse state.
///
/// The host calls [`press`](Self::press) / [`release`](Self::release) as events
/// arrive, hands the state to the engine, then calls
/// [`end_frame`](Self::end_frame) before the next batch of events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    down: HashSet<Key>,
    previous: HashSet<Key>,
    mouse: HashSet<MouseButton>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.mouse.insert(button);
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse.remove(&button);
    }

    /// Latch this frame's keys so edges only fire once.
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.down);
    }
}

impl InputSource for KeyboardState {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn is_key_press_edge(&self, key: Key) -> bool {
        self.down.contains(&key) && !self.previous.contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse.contains(&button)
    }
}

/// No keys held. Useful for idle frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_key_down(&self, _key: Key) -> bool {
        false
    }

    fn is_key_press_edge(&self, _key: Key) -> bool {
        false
    }

    fn is_mouse_button_down(&self, _button: MouseButton) -> bool {
        false
    }
}
