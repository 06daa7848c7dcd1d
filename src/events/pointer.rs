use crate::constants::{
    CARD_GLOW_SHADOW, CARD_LIFT_TRANSFORM, CARD_SELECTOR, FLOATING_BOX_HOVER_TRANSFORM,
    FLOATING_BOX_SELECTOR, FLOATING_BOX_TILT_RANGE_DEG, RIPPLE_LIFETIME_MS, SKILL_TAG_SELECTOR,
    STAT_HOVER_TRANSFORM, STAT_SELECTOR, TIMELINE_HOVER_TRANSFORM, TIMELINE_SELECTOR,
};
use crate::dom;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lift-and-glow on hover plus a pointer-following tilt for every card.
pub fn wire_card_tilt(document: &web::Document) {
    dom::for_each_selected(document, CARD_SELECTOR, |_, card| {
        let enter_card = card.clone();
        let enter = Closure::wrap(Box::new(move || {
            dom::set_style(&enter_card, "transform", CARD_LIFT_TRANSFORM);
            dom::set_style(&enter_card, "box-shadow", CARD_GLOW_SHADOW);
        }) as Box<dyn FnMut()>);
        let _ = card.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let tilt_card = card.clone();
        let tilt = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = tilt_card.get_bounding_client_rect();
            let local_x = ev.client_x() as f32 - rect.left() as f32;
            let local_y = ev.client_y() as f32 - rect.top() as f32;
            let (rotate_x, rotate_y) =
                input::tilt_angles(local_x, local_y, rect.width() as f32, rect.height() as f32);
            dom::set_style(
                &tilt_card,
                "transform",
                &input::tilt_transform(rotate_x, rotate_y),
            );
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("mousemove", tilt.as_ref().unchecked_ref());
        tilt.forget();

        let leave_card = card.clone();
        let leave = Closure::wrap(Box::new(move || {
            dom::clear_style(&leave_card, "transform");
            dom::clear_style(&leave_card, "box-shadow");
        }) as Box<dyn FnMut()>);
        let _ = card.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    });
}

fn wire_hover_transform(document: &web::Document, selector: &str, transform: &'static str) {
    dom::for_each_selected(document, selector, |_, el| {
        let enter_el = el.clone();
        let enter = Closure::wrap(Box::new(move || {
            dom::set_style(&enter_el, "transform", transform);
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let leave_el = el.clone();
        let leave = Closure::wrap(Box::new(move || {
            dom::clear_style(&leave_el, "transform");
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    });
}

pub fn wire_stat_hover(document: &web::Document) {
    wire_hover_transform(document, STAT_SELECTOR, STAT_HOVER_TRANSFORM);
}

pub fn wire_timeline_hover(document: &web::Document) {
    wire_hover_transform(document, TIMELINE_SELECTOR, TIMELINE_HOVER_TRANSFORM);
}

/// Expanding ripple spawned at the center of a skill tag on click.
pub fn wire_skill_ripples(document: &web::Document) {
    dom::for_each_selected(document, SKILL_TAG_SELECTOR, |_, tag| {
        let tag_for_click = tag.clone();
        let click = Closure::wrap(Box::new(move || {
            if let Some(doc) = dom::window_document() {
                spawn_ripple(&doc, &tag_for_click);
            }
        }) as Box<dyn FnMut()>);
        let _ = tag.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    });
}

fn spawn_ripple(document: &web::Document, host: &web::Element) {
    let Ok(ripple) = document.create_element("div") else {
        return;
    };
    for (property, value) in [
        ("position", "absolute"),
        ("border-radius", "50%"),
        ("background", "rgba(100, 255, 218, 0.6)"),
        ("transform", "scale(0)"),
        ("animation", "ripple 0.6s linear"),
        ("left", "50%"),
        ("top", "50%"),
        ("width", "20px"),
        ("height", "20px"),
        ("margin-left", "-10px"),
        ("margin-top", "-10px"),
        ("pointer-events", "none"),
    ] {
        dom::set_style(&ripple, property, value);
    }
    if host.append_child(&ripple).is_ok() {
        dom::remove_after(&ripple, RIPPLE_LIFETIME_MS);
    }
}

/// Random base rotations plus a hover pose for the floating boxes.
pub fn wire_floating_boxes(document: &web::Document) {
    dom::for_each_selected(document, FLOATING_BOX_SELECTOR, |_, floating| {
        let base_x =
            js_sys::Math::random() * FLOATING_BOX_TILT_RANGE_DEG - FLOATING_BOX_TILT_RANGE_DEG / 2.0;
        let base_y =
            js_sys::Math::random() * FLOATING_BOX_TILT_RANGE_DEG - FLOATING_BOX_TILT_RANGE_DEG / 2.0;
        dom::set_style(&floating, "--rx", &format!("{base_x:.1}deg"));
        dom::set_style(&floating, "--ry", &format!("{base_y:.1}deg"));

        let enter_box = floating.clone();
        let enter = Closure::wrap(Box::new(move || {
            dom::set_style(&enter_box, "animation-play-state", "paused");
            dom::set_style(&enter_box, "transform", FLOATING_BOX_HOVER_TRANSFORM);
        }) as Box<dyn FnMut()>);
        let _ =
            floating.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let leave_box = floating.clone();
        let leave = Closure::wrap(Box::new(move || {
            dom::set_style(&leave_box, "animation-play-state", "running");
            dom::clear_style(&leave_box, "transform");
        }) as Box<dyn FnMut()>);
        let _ =
            floating.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    });
}

/// Document-level pointer parallax for the floating boxes. The transform is
/// rebuilt whole on every event; hovered boxes keep their hover pose.
pub fn wire_parallax(document: &web::Document) {
    let listener = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let pointer = input::normalized_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            viewport_w,
            viewport_h,
        );
        let Some(doc) = dom::window_document() else {
            return;
        };
        dom::for_each_selected(&doc, FLOATING_BOX_SELECTOR, |index, floating| {
            if floating.matches(":hover").unwrap_or(false) {
                return;
            }
            dom::set_style(
                &floating,
                "transform",
                &input::parallax_transform(pointer, index),
            );
        });
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref());
    listener.forget();
}
