use crate::constants::COUNTER_SELECTOR;
use crate::core::{CounterAnimation, CounterFrame, COUNTER_TICK_MS};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animate each stat number once, the first time it scrolls into view.
pub fn wire_counters(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    start_counter(&target);
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let Ok(observer) = web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();
    dom::for_each_selected(document, COUNTER_SELECTOR, |_, el| observer.observe(&el));
}

fn start_counter(el: &web::Element) {
    let Some(target) = el
        .get_attribute("data-target")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
    else {
        return;
    };
    let mut anim = CounterAnimation::new(target);
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_for_tick = handle.clone();
    let el = el.clone();
    let tick = Closure::wrap(Box::new(move || match anim.tick() {
        CounterFrame::Running(value) => {
            el.set_text_content(Some(&value.to_string()));
        }
        CounterFrame::Done(value) => {
            el.set_text_content(Some(&value.to_string()));
            if let (Some(window), Some(id)) = (web::window(), handle_for_tick.take()) {
                window.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            COUNTER_TICK_MS as i32,
        ) {
            handle.set(Some(id));
        }
    }
    tick.forget();
}
