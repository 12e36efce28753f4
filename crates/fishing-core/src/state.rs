//! Game state snapshot: the complete visible state handed to the renderer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimClock;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: SimClock,
    pub cast: CastView,
    pub fish: FishView,
    pub minigame: MinigameView,
    pub mana_bar: ManaBarView,
    pub staff: StaffView,
    pub events: Vec<GameEvent>,
}

/// Lure state for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CastView {
    pub state: CastState,
    pub lure_position: Vec3,
    /// Where the lure sits, only while landed.
    pub landed_position: Option<Vec3>,
    /// Flight progress in `[0, 1]`.
    pub progress: f32,
}

/// Fish state for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FishView {
    pub state: PatrolState,
    pub position: Vec3,
    /// Point the fish faces.
    pub look_at: Vec3,
    /// Selects the fish material.
    pub difficulty: Difficulty,
    pub waypoint_index: usize,
}

/// Minigame pieces for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinigameView {
    pub phase: MinigamePhase,
    pub flip: f32,
    pub mana: i32,
    pub max_mana: i32,
    pub marker_position: Vec3,
    /// Marker yaw (degrees).
    pub marker_yaw: f32,
    pub target_position: Vec3,
    /// Width of the target bar; shrinks with difficulty.
    pub target_width: f32,
    pub left_edge: Vec3,
    pub right_edge: Vec3,
}

/// Mana bar placement for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManaBarView {
    pub position: Vec3,
    /// Pitch (degrees) of the bar, facing the caster.
    pub pitch: f32,
    /// Yaw (degrees) of the bar, facing the caster.
    pub yaw: f32,
    /// Width of the fill mesh, proportional to mana.
    pub fill_width: f32,
}

/// Staff placement and animation blend for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffView {
    pub position: Vec3,
    pub yaw: f32,
    pub animating: bool,
    pub frame_from: usize,
    pub frame_to: usize,
    pub blend: f32,
}
