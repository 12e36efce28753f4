//! Systems that bridge the controllers and the scene world each tick.
//!
//! Each system reads the transforms its controller needs through the scene
//! handles, runs the controller, and writes the result back.

pub mod cast;
pub mod hud;
pub mod minigame;
pub mod patrol;
pub mod snapshot;

/// Per-frame values shared by every system.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub dt: f32,
    pub paused: bool,
}
