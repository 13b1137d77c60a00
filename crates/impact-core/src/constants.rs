//! Game constants and tuning parameters.

use std::f64::consts::FRAC_PI_4;

/// Host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick at the nominal tick rate.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Longest frame delta the host loop will feed the simulation (ms).
pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

/// Most asteroids a catch-up tick may spawn; any further backlog is dropped.
pub const MAX_CATCH_UP_SPAWNS: u32 = 32;

// --- Screen ---

/// Playfield width in pixels.
pub const GAME_WIDTH: f64 = 426.0;

/// Playfield height in pixels.
pub const GAME_HEIGHT: f64 = 240.0;

/// Planet (target point) position, centre of the playfield.
pub const EARTH_X: f64 = GAME_WIDTH / 2.0;
pub const EARTH_Y: f64 = GAME_HEIGHT / 2.0;

/// Distance outside the screen edge at which asteroids appear.
pub const EDGE_BUFFER: f64 = 0.0;

// --- Spawn cadence ---

/// Interval of the fixed-rate spawn policy (ms).
pub const FIXED_SPAWN_INTERVAL_MS: f64 = 5000.0;

/// Slowest spawn interval of the ramped policy, at game start (ms).
pub const RAMP_SLOW_INTERVAL_MS: f64 = 1500.0;

/// Fastest spawn interval of the ramped policy, once fully ramped (ms).
pub const RAMP_FAST_INTERVAL_MS: f64 = 100.0;

/// Time taken to ramp from the slow to the fast interval (ms, 3 minutes).
pub const RAMP_DURATION_MS: f64 = 180_000.0;

/// Countdown to the first spawn of a ramped session (ms).
pub const RAMP_INITIAL_DELAY_MS: f64 = 500.0;

// --- Asteroid parameters ---

/// Smallest asteroid radius (pixels).
pub const ASTEROID_RADIUS_BASE: u32 = 2;

/// Number of distinct radii above the base (radius in [2, 5]).
pub const ASTEROID_RADIUS_SPAN: u32 = 4;

/// Upper bound (exclusive) of the sampled linear drag coefficient.
pub const ASTEROID_DRAG_MAX: f64 = 0.000_01;

/// Asteroid speed under the fixed speed policy (px/ms).
pub const ASTEROID_FIXED_SPEED: f64 = 0.005;

/// Asteroid speed range under the ranged speed policy (px/ms).
pub const ASTEROID_SPEED_MIN: f64 = 0.01;
pub const ASTEROID_SPEED_MAX: f64 = 0.05;

/// Half-width of the aiming cone around the planet direction (radians).
pub const ASTEROID_MAX_VARIANCE: f64 = FRAC_PI_4;

// --- Session ---

/// Default RNG seed for a session.
pub const DEFAULT_SEED: u64 = 50;
