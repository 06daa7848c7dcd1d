// Pure pointer math behind the hover and parallax effects. Kept free of
// web-sys so host-side tests can include this module directly.

/// Pointer position normalized to the viewport, with a centered fallback
/// for degenerate dimensions.
#[inline]
pub fn normalized_pointer(
    client_x: f32,
    client_y: f32,
    viewport_w: f32,
    viewport_h: f32,
) -> [f32; 2] {
    if viewport_w > 0.0 && viewport_h > 0.0 {
        [client_x / viewport_w, client_y / viewport_h]
    } else {
        [0.5, 0.5]
    }
}

/// Tilt angles for a card under the pointer: one degree per ten pixels of
/// distance from the card center, tipping toward the cursor.
#[inline]
pub fn tilt_angles(local_x: f32, local_y: f32, width: f32, height: f32) -> (f32, f32) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    ((local_y - center_y) / 10.0, (center_x - local_x) / 10.0)
}

pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "translateY(-15px) scale(1.02) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) translateZ(20px)"
    )
}

/// Parallax displacement for the box at `index`: deeper boxes move faster.
#[inline]
pub fn parallax_shift(pointer: [f32; 2], index: usize) -> (f32, f32, f32, f32) {
    let speed = (index as f32 + 1.0) * 0.3;
    let x = (pointer[0] - 0.5) * speed * 20.0;
    let y = (pointer[1] - 0.5) * speed * 20.0;
    let rotate_x = (pointer[1] - 0.5) * speed * 10.0;
    let rotate_y = (pointer[0] - 0.5) * speed * 10.0;
    (x, y, rotate_x, rotate_y)
}

/// Complete transform for a floating box, rebuilt from scratch on every
/// pointer event. A stationary pointer always yields the same string, so
/// the style attribute never grows.
pub fn parallax_transform(pointer: [f32; 2], index: usize) -> String {
    let (x, y, rotate_x, rotate_y) = parallax_shift(pointer, index);
    format!("translate3d({x:.2}px, {y:.2}px, 0) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
}
