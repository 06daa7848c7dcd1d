// Host-side tests for particle spawning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use engine::constants::{
    PARTICLE_DRIFT_MIN_SECS, PARTICLE_DRIFT_SPAN_SECS, PARTICLE_LIFETIME_MS,
    PARTICLE_SPAWN_INTERVAL_MS,
};
use engine::particles::*;

#[test]
fn spawn_parameters_stay_in_range() {
    let mut spawner = ParticleSpawner::new(42);
    for _ in 0..1_000 {
        let particle = spawner.spawn();
        assert!(
            (0.0..100.0).contains(&particle.left_percent),
            "left out of range: {}",
            particle.left_percent
        );
        let max_drift = PARTICLE_DRIFT_MIN_SECS + PARTICLE_DRIFT_SPAN_SECS;
        assert!(
            (PARTICLE_DRIFT_MIN_SECS..max_drift).contains(&particle.drift_secs),
            "drift out of range: {}",
            particle.drift_secs
        );
    }
}

#[test]
fn same_seed_spawns_the_same_stream() {
    let mut a = ParticleSpawner::new(9);
    let mut b = ParticleSpawner::new(9);
    for _ in 0..100 {
        let pa = a.spawn();
        let pb = b.spawn();
        assert_eq!(pa.left_percent, pb.left_percent);
        assert_eq!(pa.drift_secs, pb.drift_secs);
    }
}

#[test]
fn steady_state_count_matches_the_configured_rates() {
    assert_eq!(
        steady_state_count(PARTICLE_SPAWN_INTERVAL_MS, PARTICLE_LIFETIME_MS),
        17
    );
    assert_eq!(steady_state_count(1000, 5000), 5);
    assert_eq!(steady_state_count(0, 5000), 0);
}

#[test]
fn simulated_container_population_stays_bounded() {
    // Spawns at every interval mark; each particle is removed exactly
    // `lifetime` later. Count the live set over a long run.
    let spawn = PARTICLE_SPAWN_INTERVAL_MS as u64;
    let lifetime = PARTICLE_LIFETIME_MS as u64;
    let cap = steady_state_count(PARTICLE_SPAWN_INTERVAL_MS, PARTICLE_LIFETIME_MS) as u64;
    let mut max_live = 0u64;
    for now in (0..120_000u64).step_by(50) {
        let spawned = now / spawn + 1; // spawns at 0, spawn, 2*spawn, ...
        let expired = now.saturating_sub(lifetime) / spawn + u64::from(now >= lifetime);
        let live = spawned - expired;
        assert!(live <= cap, "live count {live} exceeds cap {cap} at t={now}");
        max_live = max_live.max(live);
    }
    assert_eq!(max_live, cap, "steady state never reaches the expected cap");
}
