//! Per-frame gameplay state machines.
//!
//! Each controller is plain data plus an `update` taking an input struct.
//! Collaborators are passed in explicitly, never looked up.
//! Evaluate them in order each frame: cast, patrol, minigame.

pub mod cast;
pub mod minigame;
pub mod patrol;

pub use cast::{CastController, CastInput};
pub use minigame::{MinigameController, MinigameInput};
pub use patrol::{PatrolController, PatrolInput};
