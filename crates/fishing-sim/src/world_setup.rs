//! Entity spawn factories for the fishing scene.
//!
//! Spawns every scene entity once and hands back typed handles, so systems
//! never search the world by name.

use glam::Vec3;
use hecs::{Entity, World};

use fishing_core::components::*;
use fishing_core::constants::*;
use fishing_core::enums::Difficulty;
use fishing_core::types::{PositionProvider, Transform};
use fishing_motion::morph::MorphAnimator;

/// Handles to the scene entities, resolved once at setup.
#[derive(Debug, Clone, Copy)]
pub struct SceneHandles {
    pub caster: Entity,
    pub aim: Entity,
    pub lure: Entity,
    pub fish: Entity,
    pub staff: Entity,
}

/// Spawn the caster, aim target, lure, fish and staff.
pub fn setup_scene(world: &mut World, fish_start: Vec3, difficulty: Difficulty) -> SceneHandles {
    let caster = world.spawn((Caster, Transform::at(CASTER_START)));
    let aim = world.spawn((AimTarget, Transform::at(AIM_START)));
    let lure = world.spawn((Lure, Transform::at(CASTER_START)));
    let fish = world.spawn((Fish, Transform::at(fish_start), FishVariant(difficulty)));
    let staff = world.spawn((
        Staff,
        Transform::default(),
        MorphAnimator::new(STAFF_FRAME_COUNT, STAFF_FRAME_TIME),
    ));

    SceneHandles {
        caster,
        aim,
        lure,
        fish,
        staff,
    }
}

/// Current transform of an entity, or the default if it has none.
pub fn transform_of(world: &World, entity: Entity) -> Transform {
    world
        .get::<&Transform>(entity)
        .map(|t| *t)
        .unwrap_or_default()
}

/// Overwrite an entity's position, keeping its rotation.
pub fn set_position(world: &mut World, entity: Entity, position: Vec3) {
    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        transform.position = position;
    }
}

/// Reads an entity's position lazily, when the consumer asks for it.
pub struct EntityPosition<'w> {
    pub world: &'w World,
    pub entity: Entity,
}

impl PositionProvider for EntityPosition<'_> {
    fn position(&self) -> Vec3 {
        transform_of(self.world, self.entity).position
    }
}
