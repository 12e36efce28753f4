//! Patrol system: moves the fish and keeps its variant in sync.

use glam::Vec3;
use hecs::World;
use rand::Rng;

use fishing_core::components::FishVariant;
use fishing_core::enums::CatchOutcome;
use fishing_core::events::GameEvent;
use fishing_core::types::Transform;

use crate::controllers::{CastController, PatrolController, PatrolInput};
use crate::systems::FrameContext;
use crate::world_setup::{transform_of, SceneHandles};

#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    scene: &SceneHandles,
    patrol: &mut PatrolController,
    cast: &CastController,
    minigame_outcome: Option<CatchOutcome>,
    frame: FrameContext,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let fish = transform_of(world, scene.fish);
    let update = patrol.update(
        &PatrolInput {
            dt: frame.dt,
            paused: frame.paused,
            cast_state: cast.state(),
            cast_landed_position: cast.landed_position(),
            self_position: fish.position,
            minigame_outcome,
        },
        rng,
        events,
    );

    if let Ok(mut transform) = world.get::<&mut Transform>(scene.fish) {
        if let Some(position) = update.position {
            transform.position = position;
        }
        if let Some(look_at) = update.look_at {
            if let Some(yaw) = yaw_toward(transform.position, look_at) {
                transform.yaw = yaw;
            }
        }
    }
    if let Ok(mut variant) = world.get::<&mut FishVariant>(scene.fish) {
        variant.0 = patrol.difficulty();
    }
}

/// Yaw (degrees) that faces `to` from `from` on the horizontal plane.
/// `None` when the points are stacked vertically.
pub fn yaw_toward(from: Vec3, to: Vec3) -> Option<f32> {
    let d = to - from;
    if d.x.abs() < f32::EPSILON && d.y.abs() < f32::EPSILON {
        return None;
    }
    Some((-d.x).atan2(d.y).to_degrees())
}
