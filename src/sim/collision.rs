//! Circle overlap tests
//!
//! Every entity is a circle; two touch when their centers are strictly closer
//! than the sum of their radii.

use glam::Vec2;

/// Strict overlap: exactly touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
