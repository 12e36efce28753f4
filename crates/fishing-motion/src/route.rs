//! Patrol routes: closed loops of waypoints sampled segment by segment.

use glam::Vec3;
use rand::Rng;

use fishing_core::constants::*;

use crate::curve::{catmull_rom, lerp};

/// A closed loop of waypoints.
///
/// Four or more points are sampled as Catmull-Rom. Exactly two points are
/// sampled as a straight line (the reel-in). Any other count cannot be
/// sampled and leaves the follower where it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    points: Vec<Vec3>,
}

impl Route {
    pub fn new(points: Vec<Vec3>) -> Self {
        if points.len() < 2 || points.len() == 3 {
            log::warn!(
                "route with {} waypoints cannot be sampled; follower will hold position",
                points.len()
            );
        }
        Self { points }
    }

    /// Straight reel-in from `from` to `to`.
    pub fn reel_in(from: Vec3, to: Vec3) -> Self {
        Self {
            points: vec![from, to],
        }
    }

    /// Dock entry, dock mouth, random waypoints inside the patrol box, then
    /// back to the dock mouth.
    pub fn random_patrol<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut points = Vec::with_capacity(PATROL_RANDOM_WAYPOINTS + 3);
        points.push(DOCK_ENTRY);
        points.push(DOCK_MOUTH);
        for _ in 0..PATROL_RANDOM_WAYPOINTS {
            points.push(Vec3::new(
                rng.gen_range(PATROL_BOX_MIN.x..=PATROL_BOX_MAX.x),
                rng.gen_range(PATROL_BOX_MIN.y..=PATROL_BOX_MAX.y),
                rng.gen_range(PATROL_BOX_MIN.z..=PATROL_BOX_MAX.z),
            ));
        }
        points.push(DOCK_MOUTH);
        Self { points }
    }

    /// Route for the first fish of a session: as [`random_patrol`](Self::random_patrol)
    /// but leaving from deeper in the dock. The loop still closes at the
    /// regular dock mouth.
    pub fn first_patrol<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut route = Self::random_patrol(rng);
        for point in &mut route.points[..2] {
            point.z = FIRST_DOCK_DEPTH;
        }
        route
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether [`sample`](Self::sample) can produce a position.
    pub fn is_sampleable(&self) -> bool {
        self.points.len() == 2 || self.points.len() >= CATMULL_MIN_POINTS
    }

    /// Whether sampling degrades to straight-line mode.
    pub fn is_linear(&self) -> bool {
        self.points.len() == 2
    }

    /// Position on the segment starting at waypoint `index`, `t` along it.
    /// Indices wrap around the loop.
    pub fn sample(&self, index: usize, t: f32) -> Option<Vec3> {
        let n = self.points.len();
        if n == 2 {
            let i = index % n;
            return Some(lerp(self.points[i], self.points[(i + 1) % n], t));
        }
        if n < CATMULL_MIN_POINTS {
            return None;
        }

        let i1 = index % n;
        let i0 = if i1 == 0 { n - 1 } else { i1 - 1 };
        let i2 = (i1 + 1) % n;
        let i3 = (i2 + 1) % n;
        Some(catmull_rom(
            self.points[i0],
            self.points[i1],
            self.points[i2],
            self.points[i3],
            t,
        ))
    }

    /// Point a follower on segment `index` should face.
    pub fn heading_point(&self, index: usize) -> Option<Vec3> {
        let n = self.points.len();
        match n {
            0 => None,
            2 => Some(self.points[1]),
            _ => Some(self.points[index % n]),
        }
    }

    /// Next segment index after `index`, wrapping.
    pub fn next_index(&self, index: usize) -> usize {
        if self.points.is_empty() {
            0
        } else {
            (index + 1) % self.points.len()
        }
    }
}
