//! Fish movement: a Catmull-Rom patrol loop, a straight reel-in toward a
//! landed lure, and a fresh route and difficulty once the catch settles.

use glam::Vec3;
use rand::Rng;

use fishing_core::config::FishTunables;
use fishing_core::constants::{DIFFICULTY_TIERS, HOOK_RADIUS, REEL_IN_THRESHOLD};
use fishing_core::enums::{CastState, CatchOutcome, Difficulty, PatrolState};
use fishing_core::events::GameEvent;
use fishing_motion::{PhaseTimer, Route};

/// Inputs to one patrol update.
pub struct PatrolInput {
    pub dt: f32,
    pub paused: bool,
    pub cast_state: CastState,
    /// Where the lure sits, if it has landed.
    pub cast_landed_position: Option<Vec3>,
    /// The fish's current position.
    pub self_position: Vec3,
    /// How the last minigame ended, if it ended since the previous update.
    pub minigame_outcome: Option<CatchOutcome>,
}

/// Result of one patrol update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolUpdate {
    /// New fish position. `None` leaves the fish where it is.
    pub position: Option<Vec3>,
    /// Point the fish should face.
    pub look_at: Option<Vec3>,
}

#[derive(Debug, Clone)]
pub struct PatrolController {
    state: PatrolState,
    route: Route,
    timer: PhaseTimer,
    index: usize,
    /// Seconds per segment.
    speed: f32,
    difficulty: Difficulty,
    /// Minigame result waiting for the reel-in to finish.
    settled: Option<CatchOutcome>,
}

impl PatrolController {
    /// Start patrolling a freshly sampled route at the easiest tier.
    pub fn new<R: Rng + ?Sized>(tunables: &FishTunables, rng: &mut R) -> Self {
        Self::with_route(tunables, Route::first_patrol(rng), Difficulty::Easy)
    }

    /// Start patrolling a given route.
    pub fn with_route(tunables: &FishTunables, route: Route, difficulty: Difficulty) -> Self {
        let mut timer = PhaseTimer::new(tunables.speed);
        timer.start(tunables.speed);
        Self {
            state: PatrolState::Patrolling,
            route,
            timer,
            index: 0,
            speed: tunables.speed,
            difficulty,
            settled: None,
        }
    }

    /// Run one frame.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        input: &PatrolInput,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> PatrolUpdate {
        if !input.paused {
            self.advance(input, rng, events);
        }

        PatrolUpdate {
            position: self.sample(),
            look_at: self.route.heading_point(self.index),
        }
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        input: &PatrolInput,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some(outcome) = input.minigame_outcome {
            if self.state != PatrolState::Patrolling && self.settled.is_none() {
                self.settled = Some(outcome);
            }
        }

        if self.state == PatrolState::Caught && self.settled.is_some() {
            self.respawn(rng, events);
        }

        if self.state == PatrolState::Patrolling && input.cast_state == CastState::Landed {
            if let Some(lure) = input.cast_landed_position {
                if within_hook_radius(input.self_position, lure) {
                    self.hook(input.self_position, lure, events);
                }
            }
        }

        match self.state {
            PatrolState::Patrolling => {
                if !self.route.is_sampleable() {
                    return;
                }
                self.timer.tick(input.dt);
                while self.timer.wrap() {
                    self.index = self.route.next_index(self.index);
                }
            }
            PatrolState::Hooked => {
                self.timer.tick(input.dt);
                if self.timer.progress() > REEL_IN_THRESHOLD {
                    self.timer.complete();
                    self.state = PatrolState::Caught;
                    log::info!("fish reeled in");
                    events.push(GameEvent::FishReeledIn);
                }
            }
            PatrolState::Caught => {}
        }
    }

    fn hook(&mut self, from: Vec3, lure: Vec3, events: &mut Vec<GameEvent>) {
        self.route = Route::reel_in(from, lure);
        self.index = 0;
        self.timer.start(self.speed);
        self.state = PatrolState::Hooked;
        log::info!("fish hooked at {from:?} ({:?})", self.difficulty);
        events.push(GameEvent::FishHooked {
            difficulty: self.difficulty,
        });
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, events: &mut Vec<GameEvent>) {
        self.route = Route::random_patrol(rng);
        self.difficulty = Difficulty::from_tier(rng.gen_range(0..DIFFICULTY_TIERS));
        self.index = 0;
        self.timer.start(self.speed);
        self.state = PatrolState::Patrolling;
        self.settled = None;
        log::info!("new fish in the pond ({:?})", self.difficulty);
        events.push(GameEvent::FishRespawned {
            difficulty: self.difficulty,
        });
    }

    fn sample(&self) -> Option<Vec3> {
        match self.state {
            PatrolState::Patrolling => self.route.sample(self.index, self.timer.progress()),
            PatrolState::Hooked | PatrolState::Caught => {
                self.route.sample(0, self.timer.progress().min(1.0))
            }
        }
    }

    /// Whether the minigame should be running for this fish.
    pub fn wants_minigame(&self) -> bool {
        self.state != PatrolState::Patrolling && self.settled.is_none()
    }

    pub fn state(&self) -> PatrolState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn waypoint_index(&self) -> usize {
        self.index
    }

    /// Timer progress along the active segment.
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }
}

/// Lure close enough on both horizontal axes to hook the fish.
pub fn within_hook_radius(fish: Vec3, lure: Vec3) -> bool {
    (fish.x - lure.x).abs() <= HOOK_RADIUS && (fish.y - lure.y).abs() <= HOOK_RADIUS
}
