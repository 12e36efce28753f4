//! Fixed-rate driver: feeds scripted input into the engine one tick at a time.

use std::thread;
use std::time::{Duration, Instant};

use fishing_sim::core::constants::TICK_RATE;
use fishing_sim::core::input::KeyboardState;
use fishing_sim::core::state::GameStateSnapshot;
use fishing_sim::world_setup::transform_of;
use fishing_sim::FishingEngine;

use crate::script::InputScript;

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Frames to run before stopping.
    pub ticks: u64,
    /// Sleep to each tick boundary instead of running flat out.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            ticks: 600,
            realtime: false,
        }
    }
}

/// Run the engine until `options.ticks` frames pass or a quit is requested.
/// Returns the last snapshot.
pub fn run(
    engine: &mut FishingEngine,
    script: &InputScript,
    options: &LoopOptions,
) -> GameStateSnapshot {
    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut keys = KeyboardState::new();
    let mut snapshot = GameStateSnapshot::default();

    for frame in 0..options.ticks {
        let start = Instant::now();

        apply_steps(engine, script, frame, &mut keys);
        snapshot = engine.tick(&keys);
        keys.end_frame();

        for event in &snapshot.events {
            if event.is_milestone() {
                log::info!("[{frame}] {event:?}");
            } else {
                log::debug!("[{frame}] {event:?}");
            }
        }

        if engine.quit_requested() {
            log::info!("quit after {} frames", frame + 1);
            break;
        }

        if options.realtime {
            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                thread::sleep(tick_duration - elapsed);
            }
        }
    }

    snapshot
}

fn apply_steps(engine: &mut FishingEngine, script: &InputScript, frame: u64, keys: &mut KeyboardState) {
    for step in script.steps_at(frame) {
        for &key in &step.release {
            keys.release(key);
        }
        for &key in &step.press {
            keys.press(key);
        }
        if let Some(aim) = step.aim {
            engine.set_aim_target(aim);
        }
        if let Some(yaw) = step.yaw {
            let caster = transform_of(engine.world(), engine.scene().caster);
            engine.set_caster_pose(caster.position, yaw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptStep;
    use fishing_sim::core::enums::CastState;
    use fishing_sim::core::input::Key;
    use fishing_sim::SimConfig;

    fn step(tick: u64, press: &[Key], release: &[Key]) -> ScriptStep {
        ScriptStep {
            tick,
            press: press.to_vec(),
            release: release.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn scripted_cast_lands() {
        let mut engine = FishingEngine::new(SimConfig::default());
        let script = InputScript::from_steps(vec![
            step(0, &[Key::Cast], &[]),
            step(1, &[], &[Key::Cast]),
        ]);
        let snapshot = run(
            &mut engine,
            &script,
            &LoopOptions {
                ticks: 90,
                realtime: false,
            },
        );
        assert_eq!(snapshot.clock.tick, 90);
        assert_eq!(snapshot.cast.state, CastState::Landed);
    }

    #[test]
    fn quit_from_pause_menu_stops_early() {
        let mut engine = FishingEngine::new(SimConfig::default());
        let script = InputScript::from_steps(vec![
            step(10, &[Key::Pause], &[]),
            step(11, &[Key::Confirm], &[Key::Pause]),
        ]);
        let snapshot = run(&mut engine, &script, &LoopOptions::default());
        assert!(engine.quit_requested());
        assert!(snapshot.clock.paused);
        assert_eq!(snapshot.clock.tick, 10);
    }

    #[test]
    fn yaw_step_turns_caster() {
        let mut engine = FishingEngine::new(SimConfig::default());
        let mut turn = step(0, &[], &[]);
        turn.yaw = Some(45.0);
        let snapshot = run(
            &mut engine,
            &InputScript::from_steps(vec![turn]),
            &LoopOptions {
                ticks: 1,
                realtime: false,
            },
        );
        assert_eq!(snapshot.staff.yaw, 45.0);
    }
}
