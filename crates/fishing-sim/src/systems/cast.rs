//! Cast system: drives the lure from the caster toward the aim target.

use hecs::World;

use fishing_core::events::GameEvent;
use fishing_core::input::{InputSource, Key};

use crate::controllers::{CastController, CastInput};
use crate::systems::FrameContext;
use crate::world_setup::{set_position, transform_of, EntityPosition, SceneHandles};

pub fn run(
    world: &mut World,
    scene: &SceneHandles,
    cast: &mut CastController,
    frame: FrameContext,
    input: &dyn InputSource,
    events: &mut Vec<GameEvent>,
) {
    let lure_position = {
        let target = EntityPosition {
            world,
            entity: scene.aim,
        };
        cast.update(
            &CastInput {
                dt: frame.dt,
                paused: frame.paused,
                cast_pressed: input.is_key_press_edge(Key::Cast),
                cancel_pressed: input.is_key_press_edge(Key::Cancel),
                origin: transform_of(world, scene.caster).position,
                target: &target,
            },
            events,
        )
    };
    set_position(world, scene.lure, lure_position);
}
