use super::constants::{PARTICLE_DRIFT_MIN_SECS, PARTICLE_DRIFT_SPAN_SECS};
use rand::prelude::*;

/// Spawn-time parameters for one ambient particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Horizontal offset in percent of the container width.
    pub left_percent: f32,
    /// CSS animation duration driving the drift, in seconds.
    pub drift_secs: f32,
}

/// Generates particle parameters from a seeded RNG so spawning is
/// deterministic under test.
pub struct ParticleSpawner {
    rng: StdRng,
}

impl ParticleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self) -> Particle {
        Particle {
            left_percent: self.rng.gen::<f32>() * 100.0,
            drift_secs: PARTICLE_DRIFT_MIN_SECS + self.rng.gen::<f32>() * PARTICLE_DRIFT_SPAN_SECS,
        }
    }
}

/// Live particle count once spawning and expiry balance out: one particle
/// every `spawn_interval_ms`, each removed `lifetime_ms` after creation.
pub fn steady_state_count(spawn_interval_ms: u32, lifetime_ms: u32) -> u32 {
    if spawn_interval_ms == 0 {
        return 0;
    }
    (lifetime_ms + spawn_interval_ms - 1) / spawn_interval_ms
}
