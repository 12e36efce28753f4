//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Placement of a scene entity.
/// x = East, y = North, z = Up. Angles are Euler degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the up axis (degrees).
    pub yaw: f32,
    /// Rotation about the east axis (degrees).
    pub pitch: f32,
}

/// Something that can report a position on demand.
///
/// Controllers hold one of these instead of looking entities up by name.
pub trait PositionProvider {
    fn position(&self) -> Vec3;
}

impl PositionProvider for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

impl PositionProvider for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Simulation clock shared by every controller.
///
/// Owned centrally by the engine. Controllers only ever see `paused` as an
/// argument to their update call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of unpaused ticks run so far.
    pub tick: u64,
    /// Unpaused simulation time in seconds.
    pub elapsed_secs: f64,
    /// Whether the simulation is frozen.
    pub paused: bool,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Yaw in radians.
    pub fn yaw_radians(&self) -> f32 {
        degrees_to_radians(self.yaw)
    }

    /// Point `distance` units ahead of this transform on the horizontal plane,
    /// with yaw offset by `yaw_offset` degrees.
    pub fn ahead(&self, distance: f32, yaw_offset: f32) -> Vec3 {
        let theta = degrees_to_radians(self.yaw + yaw_offset);
        Vec3::new(
            self.position.x - distance * theta.sin(),
            self.position.y + distance * theta.cos(),
            self.position.z,
        )
    }
}

impl SimClock {
    /// Advance by one frame of `dt` seconds. No-op while paused.
    pub fn advance(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }

    /// Flip the pause flag, returning the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

/// Degrees to radians using the scene's 3.141 approximation of pi.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * crate::constants::SCENE_PI / 180.0
}
