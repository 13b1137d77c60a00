//! Session configuration: spawn cadence, asteroid parameters and geometry.
//!
//! Every config is validated before a session is built from it, so the
//! simulation never has to guard against reversed ramps or empty ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::{lerp, ScreenGeometry};

/// A configuration value that would make the simulation misbehave.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawn interval must be positive and finite, got {0} ms")]
    NonPositiveInterval(f64),
    #[error("ramp duration must be positive and finite, got {0} ms")]
    NonPositiveRampDuration(f64),
    #[error("fast interval {fast_ms} ms is slower than slow interval {slow_ms} ms")]
    ReversedRamp { slow_ms: f64, fast_ms: f64 },
    #[error("initial spawn delay must be non-negative and finite, got {0} ms")]
    NegativeInitialDelay(f64),
    #[error("invalid speed range [{min}, {max})")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("aiming variance must be non-negative and finite, got {0} rad")]
    InvalidVariance(f64),
    #[error("drag upper bound must be non-negative and finite, got {0}")]
    InvalidDrag(f64),
    #[error("asteroid radius range is empty")]
    EmptyRadiusRange,
    #[error("invalid screen geometry: {0}")]
    InvalidGeometry(&'static str),
}

/// How the countdown to the next spawn is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnIntervalPolicy {
    /// Always the same interval.
    Fixed { interval_ms: f64 },
    /// Linear ramp from `slow_ms` to `fast_ms` over `ramp_duration_ms` of game time,
    /// pinned to `fast_ms` afterwards.
    Ramped {
        slow_ms: f64,
        fast_ms: f64,
        ramp_duration_ms: f64,
    },
}

/// How asteroid speed is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpeedPolicy {
    /// Every asteroid moves at the same speed (px/ms).
    Fixed { speed: f64 },
    /// Speed drawn uniformly from `[min, max)` (px/ms).
    UniformRange { min: f64, max: f64 },
}

/// What happens when a single tick covers more than one spawn interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchUpPolicy {
    /// At most one spawn per tick; any overshoot is discarded.
    #[default]
    SingleSpawnPerTick,
    /// Spawn once per exhausted interval; overshoot carries into the next countdown.
    /// Capped at `MAX_CATCH_UP_SPAWNS` per tick, after which the backlog is dropped.
    CatchUpLoop,
}

/// Spawn cadence configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub interval: SpawnIntervalPolicy,
    /// Countdown before the first spawn of a session.
    pub initial_delay_ms: f64,
    #[serde(default)]
    pub catch_up: CatchUpPolicy,
}

/// Parameters for generating spawned asteroids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    /// Smallest radius.
    pub radius_base: u32,
    /// Number of possible radii; radius is in `[base, base + span - 1]`.
    pub radius_span: u32,
    /// Exclusive upper bound of the linear drag coefficient.
    pub drag_max: f64,
    pub speed: SpeedPolicy,
    /// Half-width of the random deflection from the planet direction (radians).
    pub max_variance: f64,
}

/// Top-level configuration of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. Same seed and same deltas = same session.
    pub seed: u64,
    #[serde(default)]
    pub geometry: ScreenGeometry,
    #[serde(default)]
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub asteroids: AsteroidParams,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl SpawnIntervalPolicy {
    /// Fixed-rate policy; fails if the interval is not positive.
    pub fn fixed(interval_ms: f64) -> Result<Self, ConfigError> {
        let policy = Self::Fixed { interval_ms };
        policy.validate()?;
        Ok(policy)
    }

    /// Ramped policy; fails on a zero ramp or a fast bound above the slow bound.
    pub fn ramped(slow_ms: f64, fast_ms: f64, ramp_duration_ms: f64) -> Result<Self, ConfigError> {
        let policy = Self::Ramped {
            slow_ms,
            fast_ms,
            ramp_duration_ms,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Fixed { interval_ms } => {
                if !is_positive(interval_ms) {
                    return Err(ConfigError::NonPositiveInterval(interval_ms));
                }
            }
            Self::Ramped {
                slow_ms,
                fast_ms,
                ramp_duration_ms,
            } => {
                if !is_positive(slow_ms) {
                    return Err(ConfigError::NonPositiveInterval(slow_ms));
                }
                if !is_positive(fast_ms) {
                    return Err(ConfigError::NonPositiveInterval(fast_ms));
                }
                if !is_positive(ramp_duration_ms) {
                    return Err(ConfigError::NonPositiveRampDuration(ramp_duration_ms));
                }
                if fast_ms > slow_ms {
                    return Err(ConfigError::ReversedRamp { slow_ms, fast_ms });
                }
            }
        }
        Ok(())
    }

    /// Interval until the next spawn, given the elapsed game time.
    pub fn interval_at(&self, elapsed_ms: f64) -> f64 {
        match *self {
            Self::Fixed { interval_ms } => interval_ms,
            Self::Ramped {
                slow_ms,
                fast_ms,
                ramp_duration_ms,
            } => {
                if elapsed_ms >= ramp_duration_ms {
                    return fast_ms;
                }
                let t = (elapsed_ms / ramp_duration_ms).clamp(0.0, 1.0);
                lerp(slow_ms, fast_ms, t)
            }
        }
    }
}

impl SpeedPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Fixed { speed } => {
                if !is_non_negative(speed) {
                    return Err(ConfigError::InvalidSpeedRange {
                        min: speed,
                        max: speed,
                    });
                }
            }
            Self::UniformRange { min, max } => {
                if !is_non_negative(min) || !max.is_finite() || max < min {
                    return Err(ConfigError::InvalidSpeedRange { min, max });
                }
            }
        }
        Ok(())
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self::ramped()
    }
}

impl SpawnConfig {
    /// One asteroid every five seconds, forever.
    pub fn fixed_rate() -> Self {
        Self {
            interval: SpawnIntervalPolicy::Fixed {
                interval_ms: FIXED_SPAWN_INTERVAL_MS,
            },
            initial_delay_ms: FIXED_SPAWN_INTERVAL_MS,
            catch_up: CatchUpPolicy::SingleSpawnPerTick,
        }
    }

    /// Spawns speed up from every 1.5 s to every 0.1 s over three minutes.
    pub fn ramped() -> Self {
        Self {
            interval: SpawnIntervalPolicy::Ramped {
                slow_ms: RAMP_SLOW_INTERVAL_MS,
                fast_ms: RAMP_FAST_INTERVAL_MS,
                ramp_duration_ms: RAMP_DURATION_MS,
            },
            initial_delay_ms: RAMP_INITIAL_DELAY_MS,
            catch_up: CatchUpPolicy::SingleSpawnPerTick,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.interval.validate()?;
        if !is_non_negative(self.initial_delay_ms) {
            return Err(ConfigError::NegativeInitialDelay(self.initial_delay_ms));
        }
        Ok(())
    }
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self::ranged_speed()
    }
}

impl AsteroidParams {
    /// Slow asteroids, all at the same speed.
    pub fn fixed_speed() -> Self {
        Self {
            speed: SpeedPolicy::Fixed {
                speed: ASTEROID_FIXED_SPEED,
            },
            ..Self::ranged_speed()
        }
    }

    /// Asteroids with a random speed between 0.01 and 0.05 px/ms.
    pub fn ranged_speed() -> Self {
        Self {
            radius_base: ASTEROID_RADIUS_BASE,
            radius_span: ASTEROID_RADIUS_SPAN,
            drag_max: ASTEROID_DRAG_MAX,
            speed: SpeedPolicy::UniformRange {
                min: ASTEROID_SPEED_MIN,
                max: ASTEROID_SPEED_MAX,
            },
            max_variance: ASTEROID_MAX_VARIANCE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius_span == 0 {
            return Err(ConfigError::EmptyRadiusRange);
        }
        if !is_non_negative(self.drag_max) {
            return Err(ConfigError::InvalidDrag(self.drag_max));
        }
        if !is_non_negative(self.max_variance) {
            return Err(ConfigError::InvalidVariance(self.max_variance));
        }
        self.speed.validate()
    }
}

impl ScreenGeometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(ConfigError::InvalidGeometry("screen dimensions must be positive"));
        }
        if !self.target.is_finite() {
            return Err(ConfigError::InvalidGeometry("target point must be finite"));
        }
        if !is_non_negative(self.edge_buffer) {
            return Err(ConfigError::InvalidGeometry("edge buffer must be non-negative"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            geometry: ScreenGeometry::default(),
            spawn: SpawnConfig::default(),
            asteroids: AsteroidParams::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.spawn.validate()?;
        self.asteroids.validate()
    }

    /// Config with the same tuning but a different seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
