use crate::constants::{
    CARD_SELECTOR, CARD_STAGGER_SECS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_STAGGER_SECS,
    REVEAL_THRESHOLD, SCROLL_EFFECT_SELECTOR, SERVICE_CARD_DELAY,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Staggered entrance delays for the cards: an explicit `data-delay`
/// attribute wins, otherwise elements cascade by document order.
pub fn stagger_card_entrances(document: &web::Document) {
    dom::for_each_selected(document, CARD_SELECTOR, |index, el| {
        let delay = el
            .get_attribute("data-delay")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(index as f64 * CARD_STAGGER_SECS);
        dom::set_style(&el, "animation-delay", &format!("{delay:.1}s"));
    });
}

/// Class-based scroll animations: tag elements once they are 10% visible,
/// with the viewport bottom pulled in so effects start slightly early.
pub fn wire_scroll_effects(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_2("animate", "visible");
                if target.class_list().contains("service-card") {
                    dom::set_style(&target, "animation-delay", SERVICE_CARD_DELAY);
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();
    dom::for_each_selected(document, SCROLL_EFFECT_SELECTOR, |_, el| {
        observer.observe(&el)
    });
}

/// Style-based reveal: elements start shifted and transparent with a
/// staggered transition, then slide into place on first intersection.
pub fn wire_reveal(document: &web::Document) {
    dom::for_each_selected(document, REVEAL_SELECTOR, |index, el| {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(30px)");
        dom::set_style(&el, "transition", "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)");
        dom::set_style(
            &el,
            "transition-delay",
            &format!("{:.1}s", index as f64 * REVEAL_STAGGER_SECS),
        );
    });

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();
    dom::for_each_selected(document, REVEAL_SELECTOR, |_, el| observer.observe(&el));
}
