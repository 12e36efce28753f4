//! Casting: the lure flies from the caster to the aim target along a
//! quadratic Bezier arc, then sits there until reeled back.

use glam::Vec3;

use fishing_core::config::CastTunables;
use fishing_core::constants::CAST_APEX_HEIGHT;
use fishing_core::enums::CastState;
use fishing_core::events::GameEvent;
use fishing_core::types::PositionProvider;
use fishing_motion::curve::quadratic_bezier;
use fishing_motion::PhaseTimer;

/// Inputs to one cast update.
pub struct CastInput<'a> {
    pub dt: f32,
    pub paused: bool,
    /// Cast key went down this frame.
    pub cast_pressed: bool,
    /// Cancel key went down this frame.
    pub cancel_pressed: bool,
    /// Where the line starts; followed live while idle.
    pub origin: Vec3,
    /// Queried only at the moment of casting.
    pub target: &'a dyn PositionProvider,
}

#[derive(Debug, Clone)]
pub struct CastController {
    state: CastState,
    timer: PhaseTimer,
    /// Seconds from release to landing.
    speed: f32,
    /// Bezier control points: origin, apex, target.
    arc: [Vec3; 3],
    position: Vec3,
}

impl CastController {
    pub fn new(tunables: &CastTunables) -> Self {
        Self {
            state: CastState::Idle,
            timer: PhaseTimer::new(tunables.speed),
            speed: tunables.speed,
            arc: [Vec3::ZERO; 3],
            position: Vec3::ZERO,
        }
    }

    /// Run one frame. Returns where the lure should be drawn.
    pub fn update(&mut self, input: &CastInput, events: &mut Vec<GameEvent>) -> Vec3 {
        if !input.paused && self.state == CastState::InFlight {
            self.timer.tick(input.dt);
            if self.timer.is_finished() {
                self.timer.complete();
                self.state = CastState::Landed;
                log::info!("lure landed at {:?}", self.arc[2]);
                events.push(GameEvent::LureLanded {
                    position: self.arc[2],
                });
            }
        }

        if input.cast_pressed && !input.paused && self.state == CastState::Idle {
            self.launch(input.origin, input.target.position());
            events.push(GameEvent::CastStarted {
                target: self.arc[2],
            });
        }

        if input.cancel_pressed {
            if self.state != CastState::Idle {
                log::info!("cast cancelled from {:?}", self.state);
                events.push(GameEvent::CastCancelled);
            }
            self.recall();
        }

        self.position = match self.state {
            CastState::Idle => input.origin,
            CastState::InFlight => {
                let [p0, p1, p2] = self.arc;
                quadratic_bezier(p0, p1, p2, self.progress())
            }
            CastState::Landed => self.arc[2],
        };
        self.position
    }

    /// Drop back to idle without emitting anything. Used when a catch
    /// settles and the line is pulled in.
    pub fn recall(&mut self) {
        self.state = CastState::Idle;
        self.timer.reset();
    }

    fn launch(&mut self, origin: Vec3, target: Vec3) {
        let apex = Vec3::new(
            (origin.x + target.x) / 2.0,
            (origin.y + target.y) / 2.0,
            CAST_APEX_HEIGHT,
        );
        self.arc = [origin, apex, target];
        self.timer.start(self.speed);
        self.state = CastState::InFlight;
        log::info!("cast from {origin:?} toward {target:?}");
    }

    pub fn state(&self) -> CastState {
        self.state
    }

    /// Lure position, only meaningful while landed.
    pub fn landed_position(&self) -> Option<Vec3> {
        (self.state == CastState::Landed).then_some(self.arc[2])
    }

    /// Lure position computed by the last update.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Flight progress clamped to `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.state {
            CastState::Idle => 0.0,
            CastState::InFlight => self.timer.progress().clamp(0.0, 1.0),
            CastState::Landed => 1.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(target: &Vec3) -> CastInput<'_> {
        CastInput {
            dt: 0.0,
            paused: false,
            cast_pressed: false,
            cancel_pressed: false,
            origin: Vec3::new(0.0, 0.0, 4.0),
            target,
        }
    }

    #[test]
    fn apex_sits_midway_at_fixed_height() {
        let target = Vec3::new(10.0, 20.0, 0.0);
        let mut cast = CastController::new(&CastTunables { speed: 1.0 });
        let mut events = Vec::new();
        cast.update(
            &CastInput {
                cast_pressed: true,
                ..input(&target)
            },
            &mut events,
        );
        assert_eq!(cast.arc[1], Vec3::new(5.0, 10.0, CAST_APEX_HEIGHT));
        assert_eq!(cast.position(), Vec3::new(0.0, 0.0, 4.0));
    }
}
