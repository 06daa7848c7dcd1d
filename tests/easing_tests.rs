// Host-side tests for the scroll easing curve.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}

use easing::*;

#[test]
fn midpoint_is_exactly_half_the_distance() {
    for (start, distance, duration) in [
        (0.0, 1000.0, 1000.0),
        (200.0, -800.0, 600.0),
        (50.0, 3.0, 1.0),
        (-120.0, 4096.0, 2500.0),
    ] {
        let mid = ease_in_out_cubic(duration / 2.0, start, distance, duration);
        assert!(
            (mid - (start + distance / 2.0)).abs() < 1e-9,
            "midpoint off for start={start} distance={distance} duration={duration}: {mid}"
        );
    }
}

#[test]
fn endpoints_are_exact() {
    let start = 40.0;
    let distance = 760.0;
    let duration = 1000.0;
    assert_eq!(ease_in_out_cubic(0.0, start, distance, duration), start);
    assert_eq!(
        ease_in_out_cubic(duration, start, distance, duration),
        start + distance
    );
}

#[test]
fn curve_is_strictly_monotonic_for_positive_distance() {
    let start = 0.0;
    let distance = 500.0;
    let duration = 1000.0;
    let mut prev = ease_in_out_cubic(0.0, start, distance, duration);
    for step in 1..=200 {
        let t = duration * step as f64 / 200.0;
        let pos = ease_in_out_cubic(t, start, distance, duration);
        assert!(pos > prev, "not increasing at t={t}: {prev} -> {pos}");
        prev = pos;
    }
}

#[test]
fn curve_is_strictly_monotonic_for_negative_distance() {
    let start = 900.0;
    let distance = -900.0;
    let duration = 750.0;
    let mut prev = ease_in_out_cubic(0.0, start, distance, duration);
    for step in 1..=200 {
        let t = duration * step as f64 / 200.0;
        let pos = ease_in_out_cubic(t, start, distance, duration);
        assert!(pos < prev, "not decreasing at t={t}: {prev} -> {pos}");
        prev = pos;
    }
}

#[test]
fn curve_never_overshoots() {
    let start = 100.0;
    let distance = 650.0;
    let duration = 1000.0;
    for step in 0..=1000 {
        let t = duration * step as f64 / 1000.0;
        let pos = ease_in_out_cubic(t, start, distance, duration);
        assert!(
            (start..=start + distance).contains(&pos),
            "overshoot at t={t}: {pos}"
        );
    }
}

#[test]
fn halves_are_symmetric_around_the_midpoint() {
    let start = 0.0;
    let distance = 1000.0;
    let duration = 1000.0;
    for step in 0..=100 {
        let dt = duration / 2.0 * step as f64 / 100.0;
        let before = ease_in_out_cubic(duration / 2.0 - dt, start, distance, duration);
        let after = ease_in_out_cubic(duration / 2.0 + dt, start, distance, duration);
        let mid = start + distance / 2.0;
        assert!(
            ((mid - before) - (after - mid)).abs() < 1e-6,
            "asymmetric at dt={dt}: {before} vs {after}"
        );
    }
}
