//! Asteroid parameter generator.
//!
//! Picks a point just outside a random screen edge and aims the asteroid at the
//! planet, deflected by a random angle. Samples are drawn in a fixed order
//! (edge, edge coordinate, radius, drag, speed when ranged, deflection) so a
//! scripted source reproduces a spawn exactly.

use glam::DVec2;

use impact_core::components::SpawnedObjectSpec;
use impact_core::config::{AsteroidParams, SpeedPolicy};
use impact_core::enums::Edge;
use impact_core::types::{length_dir, point_direction, Position, ScreenGeometry, Velocity};

use crate::random::RandomSource;

/// Generate one asteroid.
pub fn generate<R: RandomSource + ?Sized>(
    geometry: &ScreenGeometry,
    params: &AsteroidParams,
    rng: &mut R,
) -> SpawnedObjectSpec {
    let edge = Edge::from_index(rng.index(Edge::ALL.len()));
    let position = edge_position(edge, geometry, rng);

    let radius = params.radius_base + rng.index(params.radius_span as usize) as u32;
    let linear_drag = rng.next_unit() * params.drag_max;
    let speed = sample_speed(&params.speed, rng);
    let variance = rng.range(-params.max_variance, params.max_variance);

    SpawnedObjectSpec {
        position: Position(position),
        radius,
        linear_drag,
        velocity: Velocity(aim_velocity(position, geometry.target, speed, variance)),
    }
}

/// Spawn point on `edge`: a whole-pixel coordinate along the edge, pushed
/// `edge_buffer` pixels off screen.
pub fn edge_position<R: RandomSource + ?Sized>(
    edge: Edge,
    geometry: &ScreenGeometry,
    rng: &mut R,
) -> DVec2 {
    let buffer = geometry.edge_buffer;
    match edge {
        Edge::Top => DVec2::new(rng.floor_scaled(geometry.width), -buffer),
        Edge::Bottom => DVec2::new(rng.floor_scaled(geometry.width), geometry.height + buffer),
        Edge::Left => DVec2::new(-buffer, rng.floor_scaled(geometry.height)),
        Edge::Right => DVec2::new(geometry.width + buffer, rng.floor_scaled(geometry.height)),
    }
}

/// Speed for one asteroid. A fixed policy draws nothing.
pub fn sample_speed<R: RandomSource + ?Sized>(policy: &SpeedPolicy, rng: &mut R) -> f64 {
    match *policy {
        SpeedPolicy::Fixed { speed } => speed,
        SpeedPolicy::UniformRange { min, max } => rng.range(min, max),
    }
}

/// Screen-space velocity from `from` toward `target`, rotated by `variance` radians.
///
/// Directions are measured with y flipped, so the angle is negated before it
/// is turned back into a screen (y-down) vector.
pub fn aim_velocity(from: DVec2, target: DVec2, speed: f64, variance: f64) -> DVec2 {
    let angle = point_direction(from, target) + variance;
    length_dir(speed, -angle)
}
