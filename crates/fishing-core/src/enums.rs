//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{DIFFICULTY_TIERS, WINDOW_HIGH, WINDOW_LOW, WINDOW_NARROWING};

/// Lifecycle of a phase timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Complete,
}

/// Lifecycle of the lure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastState {
    /// Lure rests with the caster.
    #[default]
    Idle,
    /// Lure travelling along the cast arc.
    InFlight,
    /// Lure sitting at the target point.
    Landed,
}

/// Lifecycle of the fish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolState {
    /// Swimming the closed patrol loop.
    #[default]
    Patrolling,
    /// Lured by a landed lure and being reeled in.
    Hooked,
    /// Fully reeled in, waiting for the minigame to settle the catch.
    Caught,
}

/// Fish difficulty tier. Narrows the minigame window and picks the fish variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// How a minigame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchOutcome {
    /// Stop pressed inside the window.
    Caught,
    /// Mana ran out.
    Escaped,
}

/// Minigame activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinigamePhase {
    #[default]
    Inactive,
    Active,
}

impl Difficulty {
    /// Tier as an integer in `[0, 3)`.
    pub fn tier(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Build from an integer tier, wrapping values outside `[0, 3)`.
    pub fn from_tier(tier: u8) -> Self {
        match tier % DIFFICULTY_TIERS {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// Inclusive range of `flip` values that count as a successful stop.
    pub fn stop_window(self) -> (f32, f32) {
        let narrowing = WINDOW_NARROWING * self.tier() as f32;
        (WINDOW_LOW + narrowing, WINDOW_HIGH - narrowing)
    }
}
