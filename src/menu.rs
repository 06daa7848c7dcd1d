use crate::constants::{ACTIVE_CLASS, NAV_MENU_SELECTOR, NAV_TOGGLE_SELECTOR};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn toggle(document: &web::Document) {
    for selector in [NAV_MENU_SELECTOR, NAV_TOGGLE_SELECTOR] {
        if let Ok(Some(el)) = document.query_selector(selector) {
            let _ = el.class_list().toggle(ACTIVE_CLASS);
        }
    }
}

pub fn close(document: &web::Document) {
    for selector in [NAV_MENU_SELECTOR, NAV_TOGGLE_SELECTOR] {
        if let Ok(Some(el)) = document.query_selector(selector) {
            let _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

/// Toggle button plus close-on-outside-click behavior.
pub fn wire(document: &web::Document) {
    dom::add_click_listener(document, NAV_TOGGLE_SELECTOR, || {
        if let Some(doc) = dom::window_document() {
            toggle(&doc);
        }
    });

    let outside = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let Ok(Some(nav_menu)) = doc.query_selector(NAV_MENU_SELECTOR) else {
            return;
        };
        let Ok(Some(nav_toggle)) = doc.query_selector(NAV_TOGGLE_SELECTOR) else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = target.as_ref().map_or(false, |node| {
            nav_menu.contains(Some(node)) || nav_toggle.contains(Some(node))
        });
        if !inside {
            close(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", outside.as_ref().unchecked_ref());
    outside.forget();
}
