//! Parametric curve evaluation.
//!
//! None of these clamp `t`; callers decide whether to clamp, latch or wrap.

use glam::Vec3;

/// Straight-line interpolation from `p0` to `p1`.
pub fn lerp(p0: Vec3, p1: Vec3, t: f32) -> Vec3 {
    p1 * t + p0 * (1.0 - t)
}

/// Quadratic Bezier: `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`.
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Uniform Catmull-Rom segment between `p1` and `p2`, with `p0` and `p3` as
/// the neighbours that shape the tangents.
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + t * (-p0 + p2)
        + t2 * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3)
        + t3 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3))
}
