//! Events emitted by the simulation for audio, UI and logging.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CatchOutcome, Difficulty};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Lure released toward a target.
    CastStarted { target: Vec3 },
    /// Lure reached its target.
    LureLanded { position: Vec3 },
    /// Lure pulled back to the caster.
    CastCancelled,
    /// Fish took the lure and is being reeled in.
    FishHooked { difficulty: Difficulty },
    /// Fish reached the lure.
    FishReeledIn,
    /// Timing minigame began.
    MinigameStarted { mana: i32 },
    /// Stop pressed outside the window.
    StopMissed { flip: f32, mana_left: i32 },
    /// Minigame concluded.
    MinigameEnded { outcome: CatchOutcome },
    /// A new fish entered the pond.
    FishRespawned { difficulty: Difficulty },
    Paused,
    Resumed,
    /// Player chose to quit from the pause menu.
    QuitRequested,
}

impl GameEvent {
    /// True for events the host should surface at info level.
    pub fn is_milestone(&self) -> bool {
        !matches!(self, GameEvent::StopMissed { .. })
    }
}
