//! HUD pieces anchored to the caster: the staff and the mana bar.

use hecs::World;

use fishing_core::constants::*;
use fishing_core::enums::CastState;
use fishing_core::state::{ManaBarView, StaffView};
use fishing_core::types::{degrees_to_radians, Transform};
use fishing_motion::morph::MorphAnimator;

use crate::systems::FrameContext;
use crate::world_setup::{transform_of, SceneHandles};

/// Keep the staff beside the caster and animate it while a cast is in flight.
pub fn run(world: &mut World, scene: &SceneHandles, cast_state: CastState, frame: FrameContext) {
    let caster = transform_of(world, scene.caster);
    let mut placement = caster.ahead(HUD_DISTANCE, STAFF_YAW_OFFSET);
    placement.z = STAFF_HEIGHT;

    if let Ok((transform, animator)) =
        world.query_one_mut::<(&mut Transform, &mut MorphAnimator)>(scene.staff)
    {
        transform.position = placement;
        transform.yaw = caster.yaw;

        animator.set_playing(cast_state == CastState::InFlight);
        if !frame.paused {
            animator.update(frame.dt);
        }
    }
}

pub fn staff_view(world: &World, scene: &SceneHandles) -> StaffView {
    let transform = transform_of(world, scene.staff);
    let mut view = StaffView {
        position: transform.position,
        yaw: transform.yaw,
        ..Default::default()
    };
    if let Ok(animator) = world.get::<&MorphAnimator>(scene.staff) {
        let blend = animator.blend();
        view.animating = animator.is_playing();
        view.frame_from = blend.from;
        view.frame_to = blend.to;
        view.blend = blend.t;
    }
    view
}

/// Mana bar hovering below and ahead of the caster, sized by remaining mana.
pub fn mana_bar_view(caster: &Transform, mana: i32) -> ManaBarView {
    let mut position = caster.ahead(HUD_DISTANCE, 0.0);
    position.z = caster.position.z
        - HUD_DISTANCE * degrees_to_radians(caster.pitch + MANA_BAR_PITCH_OFFSET).cos();

    ManaBarView {
        position,
        pitch: -caster.pitch,
        yaw: caster.yaw - 180.0,
        fill_width: MANA_BAR_SCALE * mana as f32,
    }
}
