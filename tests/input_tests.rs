// Host-side tests for pure pointer math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn centered_pointer_produces_no_tilt() {
    let (rotate_x, rotate_y) = tilt_angles(100.0, 50.0, 200.0, 100.0);
    assert_eq!(rotate_x, 0.0);
    assert_eq!(rotate_y, 0.0);
}

#[test]
fn tilt_grows_with_distance_from_the_center() {
    // Top-left corner of a 200x100 card.
    let (rotate_x, rotate_y) = tilt_angles(0.0, 0.0, 200.0, 100.0);
    assert_eq!(rotate_x, -5.0);
    assert_eq!(rotate_y, 10.0);
    // Bottom-right corner mirrors it.
    let (rotate_x, rotate_y) = tilt_angles(200.0, 100.0, 200.0, 100.0);
    assert_eq!(rotate_x, 5.0);
    assert_eq!(rotate_y, -10.0);
}

#[test]
fn tilt_transform_includes_the_lift_pose() {
    let transform = tilt_transform(-5.0, 10.0);
    assert!(transform.starts_with("translateY(-15px) scale(1.02)"));
    assert!(transform.contains("rotateX(-5.00deg)"));
    assert!(transform.contains("rotateY(10.00deg)"));
    assert!(transform.ends_with("translateZ(20px)"));
}

#[test]
fn normalized_pointer_maps_the_viewport_to_unit_range() {
    assert_eq!(normalized_pointer(0.0, 0.0, 1920.0, 1080.0), [0.0, 0.0]);
    assert_eq!(normalized_pointer(960.0, 540.0, 1920.0, 1080.0), [0.5, 0.5]);
    assert_eq!(normalized_pointer(1920.0, 1080.0, 1920.0, 1080.0), [1.0, 1.0]);
}

#[test]
fn normalized_pointer_falls_back_to_the_center() {
    assert_eq!(normalized_pointer(10.0, 10.0, 0.0, 1080.0), [0.5, 0.5]);
    assert_eq!(normalized_pointer(10.0, 10.0, 1920.0, 0.0), [0.5, 0.5]);
}

#[test]
fn deeper_boxes_move_faster() {
    let pointer = [1.0, 1.0];
    let (x0, y0, _, _) = parallax_shift(pointer, 0);
    let (x1, y1, _, _) = parallax_shift(pointer, 1);
    let (x2, y2, _, _) = parallax_shift(pointer, 2);
    assert!((x0 - 3.0).abs() < 1e-6 && (y0 - 3.0).abs() < 1e-6);
    assert!((x1 - 6.0).abs() < 1e-6 && (y1 - 6.0).abs() < 1e-6);
    assert!((x2 - 9.0).abs() < 1e-6 && (y2 - 9.0).abs() < 1e-6);
}

#[test]
fn centered_pointer_leaves_boxes_in_place() {
    let (x, y, rotate_x, rotate_y) = parallax_shift([0.5, 0.5], 4);
    assert_eq!((x, y, rotate_x, rotate_y), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn parallax_transform_is_idempotent_for_a_stationary_pointer() {
    // The transform is rebuilt whole every event, so repeated events with
    // the same pointer position must produce identical strings.
    let pointer = [0.25, 0.75];
    let first = parallax_transform(pointer, 2);
    let second = parallax_transform(pointer, 2);
    assert_eq!(first, second);
    assert_eq!(first.matches("translate3d").count(), 1);
}

#[test]
fn parallax_transform_formats_all_components() {
    let transform = parallax_transform([1.0, 0.0], 0);
    assert_eq!(
        transform,
        "translate3d(3.00px, -3.00px, 0) rotateX(-1.50deg) rotateY(1.50deg)"
    );
}
