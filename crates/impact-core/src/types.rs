//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// 2D position in screen space (pixels).
/// x = right, y = down, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in screen space (pixels per millisecond).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Session time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of host ticks processed while the game was active.
    pub tick: u64,
    /// Elapsed game time in milliseconds.
    pub elapsed_ms: f64,
}

/// Fixed world geometry for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    /// Screen width in pixels.
    pub width: f64,
    /// Screen height in pixels.
    pub height: f64,
    /// Point every asteroid is aimed at (the planet).
    pub target: DVec2,
    /// How far outside the screen edge asteroids appear.
    #[serde(default)]
    pub edge_buffer: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Speed magnitude (px/ms).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    /// Heading in screen space: `atan2(vy, vx)`, clockwise from +x since y points down.
    pub fn heading(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }
}

impl SimTime {
    /// Advance by one host tick of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += delta_ms;
    }

    /// Elapsed game time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms / 1000.0
    }
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            target: DVec2::new(EARTH_X, EARTH_Y),
            edge_buffer: EDGE_BUFFER,
        }
    }
}

/// Angle in radians of the vector from `from` to `to`.
///
/// The y axis is flipped so the angle reads counter-clockwise on screen:
/// 0 points toward +x, π/2 points up (toward -y).
pub fn point_direction(from: DVec2, to: DVec2) -> f64 {
    (from.y - to.y).atan2(to.x - from.x)
}

/// Vector of the given length along `angle` (`(len*cos, len*sin)`).
pub fn length_dir(length: f64, angle: f64) -> DVec2 {
    DVec2::new(length * angle.cos(), length * angle.sin())
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
