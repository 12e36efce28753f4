//! Reel-in timing minigame.
//!
//! A marker sweeps back and forth in front of the caster, driven by the
//! `flip` counter. Stopping it while `flip` sits inside the difficulty window
//! lands the fish; every stop outside the window costs mana, and running out
//! of mana lets the fish go.
//!
//! `flip` advances by one per tick regardless of `dt`. The engine runs on a
//! fixed tick so the sweep speed is stable.

use glam::Vec3;

use fishing_core::config::MinigameTunables;
use fishing_core::constants::*;
use fishing_core::enums::{CatchOutcome, Difficulty, MinigamePhase};
use fishing_core::events::GameEvent;
use fishing_core::state::MinigameView;
use fishing_core::types::Transform;

/// Inputs to one minigame update.
pub struct MinigameInput {
    pub paused: bool,
    /// Patrol wants a minigame running.
    pub hooked: bool,
    /// Stop key held this frame.
    pub stop_down: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone)]
pub struct MinigameController {
    phase: MinigamePhase,
    flip: f32,
    mana: i32,
    max_mana: i32,
    move_x: f32,
    move_y: f32,
    move_speed_x: f32,
    move_speed_y: f32,
    /// Stop key already handled; cleared on release.
    stop_latched: bool,
}

impl MinigameController {
    pub fn new(tunables: &MinigameTunables) -> Self {
        Self {
            phase: MinigamePhase::Inactive,
            flip: FLIP_INITIAL,
            mana: MAX_MANA,
            max_mana: MAX_MANA,
            move_x: 0.0,
            move_y: 0.0,
            move_speed_x: tunables.move_speed_x,
            move_speed_y: tunables.move_speed_y,
            stop_latched: false,
        }
    }

    /// Run one frame. Returns the outcome if the minigame ended this frame.
    pub fn update(
        &mut self,
        input: &MinigameInput,
        events: &mut Vec<GameEvent>,
    ) -> Option<CatchOutcome> {
        if input.paused {
            return None;
        }

        if input.hooked && self.phase == MinigamePhase::Inactive {
            self.phase = MinigamePhase::Active;
            self.mana = self.max_mana;
            log::info!("minigame started ({:?})", input.difficulty);
            events.push(GameEvent::MinigameStarted { mana: self.mana });
        }

        let mut outcome = None;

        // Presses are judged against the marker as last drawn.
        if input.stop_down {
            if !self.stop_latched {
                self.stop_latched = true;
                if self.is_active() {
                    if stop_in_window(self.flip, input.difficulty) {
                        outcome = Some(CatchOutcome::Caught);
                    } else {
                        self.mana -= MISS_MANA_COST;
                        log::debug!("stop missed at flip {}, mana {}", self.flip, self.mana);
                        events.push(GameEvent::StopMissed {
                            flip: self.flip,
                            mana_left: self.mana,
                        });
                    }
                }
            }
        } else {
            self.stop_latched = false;
        }

        if outcome.is_none() && self.is_active() && self.mana <= 0 {
            outcome = Some(CatchOutcome::Escaped);
        }

        if let Some(outcome) = outcome {
            self.conclude(outcome, events);
            return Some(outcome);
        }

        if self.is_active() {
            self.sweep();
        }
        None
    }

    fn sweep(&mut self) {
        self.flip += 1.0;
        if self.flip >= FLIP_BOUND {
            self.move_speed_x = -self.move_speed_x;
            self.move_speed_y = -self.move_speed_y;
            self.flip = 0.0;
        }
        self.move_x += self.move_speed_x;
        self.move_y += self.move_speed_y;
    }

    fn conclude(&mut self, outcome: CatchOutcome, events: &mut Vec<GameEvent>) {
        self.phase = MinigamePhase::Inactive;
        self.move_x = 0.0;
        self.move_y = 0.0;
        log::info!("minigame ended: {outcome:?} with {} mana left", self.mana);
        events.push(GameEvent::MinigameEnded { outcome });
    }

    /// Where every minigame piece should be drawn for a caster.
    pub fn view(&self, caster: &Transform, difficulty: Difficulty) -> MinigameView {
        let theta = caster.yaw_radians();
        let (cos, sin) = (theta.cos(), theta.sin());
        let middle = caster.ahead(MINIGAME_DISTANCE, 0.0);
        let rotation = caster.yaw - 90.0;

        let mut view = MinigameView {
            phase: self.phase,
            flip: self.flip,
            mana: self.mana,
            max_mana: self.max_mana,
            marker_position: HIDDEN_POSITION,
            marker_yaw: rotation,
            target_position: HIDDEN_POSITION,
            target_width: 0.30 - 0.1 * difficulty.tier() as f32,
            left_edge: HIDDEN_POSITION,
            right_edge: HIDDEN_POSITION,
        };
        if !self.is_active() {
            return view;
        }

        view.marker_position = Vec3::new(
            middle.x + self.move_x * cos,
            middle.y + self.move_y * sin,
            MARKER_HEIGHT,
        );
        view.target_position = Vec3::new(middle.x, middle.y, TARGET_BAR_HEIGHT);

        let half_span = (6.0 - 2.0 * difficulty.tier() as f32) * WINDOW_EDGE_SPACING;
        let offset = Vec3::new(half_span * cos, half_span * sin, 0.0);
        let edge_centre = Vec3::new(middle.x, middle.y, WINDOW_EDGE_HEIGHT);
        view.left_edge = edge_centre - offset;
        view.right_edge = edge_centre + offset;
        view
    }

    pub fn is_active(&self) -> bool {
        self.phase == MinigamePhase::Active
    }

    pub fn phase(&self) -> MinigamePhase {
        self.phase
    }

    pub fn flip(&self) -> f32 {
        self.flip
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    #[cfg(test)]
    pub fn set_flip(&mut self, flip: f32) {
        self.flip = flip;
    }
}

/// Whether a stop at `flip` lands inside the window for `difficulty`.
pub fn stop_in_window(flip: f32, difficulty: Difficulty) -> bool {
    let (low, high) = difficulty.stop_window();
    flip >= low && flip <= high
}
