//! Simulation engine for the fishing game.
//!
//! Owns the hecs scene world and the three gameplay controllers, runs them
//! in a fixed order each tick, and produces `GameStateSnapshot`s.

pub mod controllers;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{FishingEngine, SimConfig};
pub use fishing_core as core;
