//! Phase timer: elapsed time against a duration.
//!
//! Two consumers use it differently. A one-shot (the cast) latches to
//! `Complete` once the duration is reached. A loop (the patrol) calls
//! [`PhaseTimer::wrap`] to carry the overshoot into the next segment.

use fishing_core::enums::Phase;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseTimer {
    phase: Phase,
    elapsed: f32,
    duration: f32,
}

impl PhaseTimer {
    /// A timer sitting in `Idle` with the given duration.
    pub fn new(duration: f32) -> Self {
        Self {
            phase: Phase::Idle,
            elapsed: 0.0,
            duration,
        }
    }

    /// Enter `Active` with a fresh duration. Elapsed restarts at zero.
    pub fn start(&mut self, duration: f32) {
        self.phase = Phase::Active;
        self.elapsed = 0.0;
        self.duration = duration;
    }

    /// Back to `Idle`, keeping the duration.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.elapsed = 0.0;
    }

    /// Add `dt` to elapsed. Only counts while `Active`.
    pub fn tick(&mut self, dt: f32) {
        if self.phase == Phase::Active {
            self.elapsed += dt.max(0.0);
        }
    }

    /// `elapsed / duration`, unclamped. A zero duration counts as finished.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.elapsed / self.duration
    }

    /// True once elapsed has strictly passed `duration`.
    pub fn has_elapsed_past(&self, duration: f32) -> bool {
        self.elapsed > duration
    }

    /// True once elapsed has reached the timer's own duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Latch to `Complete`; further ticks are ignored.
    pub fn complete(&mut self) {
        self.phase = Phase::Complete;
    }

    /// Subtract one duration from elapsed if it has been passed. Returns
    /// whether a wrap happened so the caller can advance its segment.
    pub fn wrap(&mut self) -> bool {
        if self.duration > 0.0 && self.has_elapsed_past(self.duration) {
            self.elapsed -= self.duration;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
