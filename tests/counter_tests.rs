// Host-side tests for the counter animation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
}

use engine::counter::*;

fn run_to_completion(target: f64) -> (Vec<i64>, i64, usize) {
    let mut anim = CounterAnimation::new(target);
    let mut shown = Vec::new();
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks <= 1_000, "counter for target {target} never finished");
        match anim.tick() {
            CounterFrame::Running(value) => shown.push(value),
            CounterFrame::Done(value) => return (shown, value, ticks),
        }
    }
}

#[test]
fn target_57_lands_exactly_on_57() {
    let (shown, final_value, ticks) = run_to_completion(57.0);
    assert_eq!(final_value, 57);
    for pair in shown.windows(2) {
        assert!(pair[1] >= pair[0], "displayed values regressed: {pair:?}");
    }
    if let Some(&last) = shown.last() {
        assert!(last < 57, "intermediate value reached the target early");
    }
    // One hundred increments of target/100, with at most one extra tick for
    // float accumulation error.
    assert!((100..=101).contains(&ticks), "unexpected tick count {ticks}");
}

#[test]
fn round_targets_finish_in_exactly_one_hundred_ticks() {
    let (_, final_value, ticks) = run_to_completion(10_000.0);
    assert_eq!(final_value, 10_000);
    assert_eq!(ticks, 100);
}

#[test]
fn zero_target_finishes_immediately() {
    let (shown, final_value, ticks) = run_to_completion(0.0);
    assert!(shown.is_empty());
    assert_eq!(final_value, 0);
    assert_eq!(ticks, 1);
}

#[test]
fn small_targets_still_count_up() {
    let (shown, final_value, _) = run_to_completion(3.0);
    assert_eq!(final_value, 3);
    for value in shown {
        assert!((0..3).contains(&value));
    }
}

#[test]
fn value_accessors_track_progress() {
    let mut anim = CounterAnimation::new(200.0);
    assert_eq!(anim.value(), 0.0);
    assert_eq!(anim.target(), 200.0);
    anim.tick();
    assert_eq!(anim.value(), 2.0);
}
