//! ECS components for hecs entities.
//!
//! Scene entities carry a [`Transform`](crate::types::Transform) plus one of
//! these tags. Game logic lives in controllers and systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// The player's head: origin of every cast and anchor of the HUD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Caster;

/// Where the next cast will land.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimTarget;

/// The bobber at the end of the line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lure;

/// The fish swimming the pond.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fish;

/// Material variant of the fish, keyed by difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishVariant(pub Difficulty);

/// The caster's staff, animated while a cast is in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Staff;
