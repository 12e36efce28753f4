//! Fishing engine: the composition root of the game.
//!
//! `FishingEngine` owns the hecs scene world, the controllers and the seeded
//! RNG. Each tick it handles pause input, runs cast, patrol and minigame in
//! that order, and produces a `GameStateSnapshot`. Completely headless,
//! enabling deterministic testing.

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fishing_core::config::Tunables;
use fishing_core::constants::DT;
use fishing_core::enums::CatchOutcome;
use fishing_core::events::GameEvent;
use fishing_core::input::{InputSource, Key};
use fishing_core::state::GameStateSnapshot;
use fishing_core::types::{SimClock, Transform};

use crate::controllers::{CastController, MinigameController, PatrolController};
use crate::systems::{self, FrameContext};
use crate::world_setup::{self, SceneHandles};

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            tunables: Tunables::default(),
        }
    }
}

pub struct FishingEngine {
    world: World,
    scene: SceneHandles,
    clock: SimClock,
    dt: f32,
    rng: ChaCha8Rng,
    cast: CastController,
    patrol: PatrolController,
    minigame: MinigameController,
    /// Outcome from the previous tick, seen by patrol on the next one.
    last_outcome: Option<CatchOutcome>,
    quit_requested: bool,
    events: Vec<GameEvent>,
}

impl FishingEngine {
    /// Create a new engine with the scene set up and the fish patrolling.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let patrol = PatrolController::new(&config.tunables.fish, &mut rng);
        Self::assemble(config, rng, patrol)
    }

    /// Create an engine whose fish starts from a given controller.
    pub fn with_patrol(config: SimConfig, patrol: PatrolController) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, rng, patrol)
    }

    fn assemble(config: SimConfig, rng: ChaCha8Rng, patrol: PatrolController) -> Self {
        let mut world = World::new();
        let fish_start = patrol.route().points().first().copied().unwrap_or(Vec3::ZERO);
        let scene = world_setup::setup_scene(&mut world, fish_start, patrol.difficulty());
        log::info!("fishing session started (seed {})", config.seed);

        Self {
            world,
            scene,
            clock: SimClock::default(),
            dt: config.dt,
            rng,
            cast: CastController::new(&config.tunables.cast),
            patrol,
            minigame: MinigameController::new(&config.tunables.minigame),
            last_outcome: None,
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Place the caster (the camera the line is cast from). Pitch is kept.
    pub fn set_caster_pose(&mut self, position: Vec3, yaw: f32) {
        if let Ok(mut transform) = self.world.get::<&mut Transform>(self.scene.caster) {
            transform.position = position;
            transform.yaw = yaw;
        }
    }

    pub fn set_caster_pitch(&mut self, pitch: f32) {
        if let Ok(mut transform) = self.world.get::<&mut Transform>(self.scene.caster) {
            transform.pitch = pitch;
        }
    }

    /// Move the aim target the next cast will fly to.
    pub fn set_aim_target(&mut self, position: Vec3) {
        world_setup::set_position(&mut self.world, self.scene.aim, position);
    }

    /// Advance one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &dyn InputSource) -> GameStateSnapshot {
        self.advance(self.dt, input)
    }

    /// Advance by an arbitrary `dt` and return the resulting snapshot.
    pub fn advance(&mut self, dt: f32, input: &dyn InputSource) -> GameStateSnapshot {
        self.handle_pause(input);

        let frame = FrameContext {
            dt,
            paused: self.clock.paused,
        };
        self.run_systems(frame, input);
        self.clock.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.scene,
            self.clock,
            &self.cast,
            &self.patrol,
            &self.minigame,
            events,
        )
    }

    fn handle_pause(&mut self, input: &dyn InputSource) {
        if input.is_key_press_edge(Key::Pause) {
            if self.clock.toggle_pause() {
                log::info!("paused at tick {}", self.clock.tick);
                self.events.push(GameEvent::Paused);
            } else {
                log::info!("resumed at tick {}", self.clock.tick);
                self.events.push(GameEvent::Resumed);
            }
        } else if self.clock.paused && input.is_key_press_edge(Key::Confirm) && !self.quit_requested
        {
            self.quit_requested = true;
            log::info!("quit requested from pause menu");
            self.events.push(GameEvent::QuitRequested);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, frame: FrameContext, input: &dyn InputSource) {
        // 1. Cast
        systems::cast::run(
            &mut self.world,
            &self.scene,
            &mut self.cast,
            frame,
            input,
            &mut self.events,
        );
        // 2. Patrol (sees the previous tick's minigame outcome). A pending
        // outcome is held across paused frames until patrol can latch it.
        let outcome = if frame.paused {
            None
        } else {
            self.last_outcome.take()
        };
        systems::patrol::run(
            &mut self.world,
            &self.scene,
            &mut self.patrol,
            &self.cast,
            outcome,
            frame,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Minigame
        if let Some(outcome) = systems::minigame::run(
            &mut self.world,
            &self.scene,
            &mut self.minigame,
            &self.patrol,
            &mut self.cast,
            frame,
            input,
            &mut self.events,
        ) {
            self.last_outcome = Some(outcome);
        }
        // 4. Staff
        systems::hud::run(&mut self.world, &self.scene, self.cast.state(), frame);
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.clock.paused
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn cast(&self) -> &CastController {
        &self.cast
    }

    pub fn patrol(&self) -> &PatrolController {
        &self.patrol
    }

    pub fn minigame(&self) -> &MinigameController {
        &self.minigame
    }

    pub fn scene(&self) -> &SceneHandles {
        &self.scene
    }

    /// Get a read-only reference to the scene world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn minigame_mut(&mut self) -> &mut MinigameController {
        &mut self.minigame
    }
}
