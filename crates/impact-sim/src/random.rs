//! Random sample sources.
//!
//! Systems draw every random value through [`RandomSource`] so a session can run
//! on a seeded `ChaCha8Rng` while tests feed an exact, scripted sequence.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`. Not thread-safe; owned by one session.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize {
        ((self.next_unit() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    /// `floor(u * dimension)`: a whole-pixel coordinate in `[0, dimension)`.
    fn floor_scaled(&mut self, dimension: f64) -> f64 {
        (self.next_unit() * dimension).floor()
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of samples, for tests and recorded replays.
///
/// Once the list runs out the last sample repeats (0.0 if the list was empty).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    samples: VecDeque<f64>,
    last: f64,
    drawn: usize,
}

impl ScriptedRandom {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            last: 0.0,
            drawn: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Samples not yet drawn.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.drawn += 1;
        if let Some(sample) = self.samples.pop_front() {
            self.last = sample;
        }
        self.last
    }
}
