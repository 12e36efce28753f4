//! Designer tunables and their JSON persistence.
//!
//! Only tunable parameters are stored. Runtime state (timers, phases, mana,
//! marker position) is rebuilt from scratch every session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while reading or writing a tunables file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("tunables file io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("tunables file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Casting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastTunables {
    /// Seconds from release to landing.
    pub speed: f32,
}

/// Fish swimming parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishTunables {
    /// Seconds per patrol segment (and for the reel-in).
    pub speed: f32,
}

/// Minigame marker parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinigameTunables {
    /// Marker sweep per tick along the caster's right axis.
    #[serde(rename = "move_speedX")]
    pub move_speed_x: f32,
    #[serde(rename = "move_speedY")]
    pub move_speed_y: f32,
}

/// Every tunable in the game, grouped per controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub cast: CastTunables,
    pub fish: FishTunables,
    pub minigame: MinigameTunables,
}

impl Default for CastTunables {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl Default for FishTunables {
    fn default() -> Self {
        Self { speed: 2.0 }
    }
}

impl Default for MinigameTunables {
    fn default() -> Self {
        Self {
            move_speed_x: 0.05,
            move_speed_y: 0.05,
        }
    }
}

/// Read tunables from a JSON file. Missing fields fall back to defaults.
pub fn load_tunables(path: &Path) -> Result<Tunables, ConfigError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write tunables as pretty JSON, creating parent directories as needed.
pub fn save_tunables(path: &Path, tunables: &Tunables) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(tunables)?;
    fs::write(path, json)?;
    Ok(())
}
