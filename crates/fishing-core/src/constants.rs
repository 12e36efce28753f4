//! Simulation constants and fixed gameplay parameters.
//!
//! Values a designer is expected to tweak live in [`crate::config::Tunables`];
//! everything here is baked into the scene layout or the minigame rules.

use glam::Vec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Approximation of pi used by the scene placement math.
pub const SCENE_PI: f32 = 3.141;

// --- Scene layout ---

/// Where the caster stands when the scene starts.
pub const CASTER_START: Vec3 = Vec3::new(23.0, -30.0, 4.0);

/// Where the aim target sits when the scene starts.
pub const AIM_START: Vec3 = Vec3::new(20.0, 10.0, 0.0);

// --- Casting ---

/// Height of the middle Bezier control point of a cast arc.
pub const CAST_APEX_HEIGHT: f32 = 10.0;

// --- Patrol ---

/// Horizontal distance (per axis) within which a landed lure hooks the fish.
pub const HOOK_RADIUS: f32 = 6.0;

/// Reel-in progress beyond which the fish counts as fully reeled in.
pub const REEL_IN_THRESHOLD: f32 = 0.98;

/// Number of randomly sampled waypoints in a patrol route.
pub const PATROL_RANDOM_WAYPOINTS: usize = 14;

/// Minimum number of waypoints for Catmull-Rom patrol.
pub const CATMULL_MIN_POINTS: usize = 4;

/// Where the fish enters the pond from.
pub const DOCK_ENTRY: Vec3 = Vec3::new(23.0, -50.0, -2.0);

/// Mouth of the dock; the route leaves through it and returns to it.
pub const DOCK_MOUTH: Vec3 = Vec3::new(23.0, -24.0, -2.0);

/// Depth of the dock entry and mouth on the very first route of a session.
/// Respawned routes use the dock points as declared.
pub const FIRST_DOCK_DEPTH: f32 = -4.0;

/// Lower corner of the box random waypoints are drawn from.
pub const PATROL_BOX_MIN: Vec3 = Vec3::new(0.0, -10.0, -10.0);

/// Upper corner of the box random waypoints are drawn from.
pub const PATROL_BOX_MAX: Vec3 = Vec3::new(40.0, 30.0, -2.0);

/// Number of difficulty tiers.
pub const DIFFICULTY_TIERS: u8 = 3;

// --- Minigame ---

/// Mana granted at the start of every minigame.
pub const MAX_MANA: i32 = 200;

/// Mana lost per stop press outside the window.
pub const MISS_MANA_COST: i32 = 40;

/// Value of `flip` at which the marker reverses direction.
pub const FLIP_BOUND: f32 = 40.0;

/// Starting value of `flip`.
pub const FLIP_INITIAL: f32 = 20.0;

/// Lower edge of the success window at the easiest tier.
pub const WINDOW_LOW: f32 = 14.0;

/// Upper edge of the success window at the easiest tier.
pub const WINDOW_HIGH: f32 = 26.0;

/// Amount each difficulty tier shaves off both window edges.
pub const WINDOW_NARROWING: f32 = 2.0;

/// Distance of the minigame bar in front of the caster.
pub const MINIGAME_DISTANCE: f32 = 2.0;

/// Height of the minigame marker.
pub const MARKER_HEIGHT: f32 = 4.0;

/// Height of the window edge markers.
pub const WINDOW_EDGE_HEIGHT: f32 = 3.5;

/// Height of the target bar.
pub const TARGET_BAR_HEIGHT: f32 = 3.71;

/// Spacing factor between the window edge markers.
pub const WINDOW_EDGE_SPACING: f32 = 0.05;

/// Where hidden minigame pieces are parked.
pub const HIDDEN_POSITION: Vec3 = Vec3::new(0.0, 0.0, -20.0);

// --- HUD ---

/// Distance of the mana bar and staff from the caster.
pub const HUD_DISTANCE: f32 = 1.5;

/// Pitch offset (degrees) used to drop the mana bar below eye level.
pub const MANA_BAR_PITCH_OFFSET: f32 = 40.0;

/// Mana bar fill width per point of mana.
pub const MANA_BAR_SCALE: f32 = 0.00025;

/// Yaw offset (degrees) of the staff relative to the caster.
pub const STAFF_YAW_OFFSET: f32 = -40.0;

/// Height of the staff.
pub const STAFF_HEIGHT: f32 = 2.0;

/// Number of keyframes in the staff casting animation.
pub const STAFF_FRAME_COUNT: usize = 4;

/// Seconds per staff keyframe.
pub const STAFF_FRAME_TIME: f32 = 0.15;
