//! Minigame system: runs the timing minigame and settles the catch.

use hecs::World;

use fishing_core::enums::CatchOutcome;
use fishing_core::events::GameEvent;
use fishing_core::input::{InputSource, Key};

use crate::controllers::{CastController, MinigameController, MinigameInput, PatrolController};
use crate::systems::FrameContext;
use crate::world_setup::{set_position, transform_of, SceneHandles};

/// Returns the outcome if the minigame ended this frame. On either outcome
/// the cast is recalled and the lure snaps back to the caster.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &SceneHandles,
    minigame: &mut MinigameController,
    patrol: &PatrolController,
    cast: &mut CastController,
    frame: FrameContext,
    input: &dyn InputSource,
    events: &mut Vec<GameEvent>,
) -> Option<CatchOutcome> {
    let outcome = minigame.update(
        &MinigameInput {
            paused: frame.paused,
            hooked: patrol.wants_minigame(),
            stop_down: input.is_key_down(Key::Reel),
            difficulty: patrol.difficulty(),
        },
        events,
    );

    if outcome.is_some() {
        cast.recall();
        let origin = transform_of(world, scene.caster).position;
        set_position(world, scene.lure, origin);
    }
    outcome
}
