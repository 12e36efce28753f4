//! Motion primitives for the fishing simulation.
//!
//! Curve evaluation, phase timers, patrol routes and morph keyframe cycling.
//! Pure data and arithmetic, no ECS dependency.

pub mod curve;
pub mod morph;
pub mod route;
pub mod timer;

pub use fishing_core as core;
pub use route::Route;
pub use timer::PhaseTimer;

#[cfg(test)]
mod tests;
