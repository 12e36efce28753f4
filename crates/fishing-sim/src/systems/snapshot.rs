//! Snapshot builder: reads the world and controllers to produce a
//! `GameStateSnapshot` for the renderer.

use hecs::World;

use fishing_core::events::GameEvent;
use fishing_core::state::*;
use fishing_core::types::SimClock;

use crate::controllers::{CastController, MinigameController, PatrolController};
use crate::systems::hud;
use crate::world_setup::{transform_of, SceneHandles};

pub fn build_snapshot(
    world: &World,
    scene: &SceneHandles,
    clock: SimClock,
    cast: &CastController,
    patrol: &PatrolController,
    minigame: &MinigameController,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let caster = transform_of(world, scene.caster);
    let fish = transform_of(world, scene.fish);

    GameStateSnapshot {
        clock,
        cast: CastView {
            state: cast.state(),
            lure_position: transform_of(world, scene.lure).position,
            landed_position: cast.landed_position(),
            progress: cast.progress(),
        },
        fish: FishView {
            state: patrol.state(),
            position: fish.position,
            look_at: patrol
                .route()
                .heading_point(patrol.waypoint_index())
                .unwrap_or(fish.position),
            difficulty: patrol.difficulty(),
            waypoint_index: patrol.waypoint_index(),
        },
        minigame: minigame.view(&caster, patrol.difficulty()),
        mana_bar: hud::mana_bar_view(&caster, minigame.mana()),
        staff: hud::staff_view(world, scene),
        events,
    }
}
