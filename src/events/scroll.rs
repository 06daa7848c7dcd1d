use crate::constants::{
    ACTIVE_CLASS, ANCHOR_LINK_SELECTOR, NAVBAR_SELECTOR, NAV_LINK_SELECTOR, SCROLLED_CLASS,
    SCROLLING_CLASS, SCROLL_END_MS, SECTION_SELECTOR,
};
use crate::core::{active_section, navbar_scrolled, ScrollAnimation, SectionBounds};
use crate::dom;
use crate::driver::{ActiveScroll, Driver};
use crate::menu;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire every in-page anchor link to the smooth-scroll animator.
pub fn wire_anchor_links(document: &web::Document, driver: &Rc<Driver>) {
    init_scroll_stepper(driver);
    let mut wired = 0u32;
    dom::for_each_selected(document, ANCHOR_LINK_SELECTOR, |_, link| {
        let driver = driver.clone();
        let link_for_click = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let Some(target) = link_for_click.get_attribute("href") else {
                return;
            };
            if target == "#" {
                return;
            }
            if let Some(doc) = dom::window_document() {
                // Mark the clicked link active immediately rather than
                // waiting for the scroll tracker to catch up.
                dom::for_each_selected(&doc, NAV_LINK_SELECTOR, |_, other| {
                    let _ = other.class_list().remove_1(ACTIVE_CLASS);
                });
                let _ = link_for_click.class_list().add_1(ACTIVE_CLASS);
                menu::close(&doc);
            }
            begin_scroll(&driver, &target);
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    });
    log::info!("[scroll] wired {wired} anchor links");
}

/// Start (or supersede) the smooth scroll toward `anchor`. A missing target
/// leaves the viewport untouched.
pub fn begin_scroll(driver: &Rc<Driver>, anchor: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(Some(target)) = document.query_selector(anchor) else {
        return;
    };
    let Ok(target) = target.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let start = window.scroll_y().unwrap_or(0.0);
    let anim = ScrollAnimation::to_target(start, target.offset_top() as f64);
    *driver.scroll.borrow_mut() = Some(ActiveScroll {
        anim,
        started: Instant::now(),
    });
    request_scroll_frame(driver);
}

// Single persistent stepper: it only ever reads the driver's current slot,
// so a superseded animation has no continuation left to fire.
fn init_scroll_stepper(driver: &Rc<Driver>) {
    if driver.scroll_step.borrow().is_some() {
        return;
    }
    let driver_step = driver.clone();
    let step = Closure::wrap(Box::new(move || {
        driver_step.scroll_frame_pending.set(false);
        let done = match driver_step.scroll.borrow().as_ref() {
            Some(active) => {
                let elapsed = active.started.elapsed().as_secs_f64() * 1000.0;
                if let Some(window) = web::window() {
                    window.scroll_to_with_x_and_y(0.0, active.anim.position_at(elapsed));
                }
                active.anim.finished(elapsed)
            }
            None => true,
        };
        if done {
            driver_step.scroll.borrow_mut().take();
        } else {
            request_scroll_frame(&driver_step);
        }
    }) as Box<dyn FnMut()>);
    *driver.scroll_step.borrow_mut() = Some(step);
}

fn request_scroll_frame(driver: &Rc<Driver>) {
    if driver.scroll_frame_pending.get() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let step = driver.scroll_step.borrow();
    if let Some(step) = step.as_ref() {
        if window
            .request_animation_frame(step.as_ref().unchecked_ref())
            .is_ok()
        {
            driver.scroll_frame_pending.set(true);
        }
    }
}

/// Scroll listener driving navigation state, navbar styling and the
/// transient body-level scrolling class, at most one DOM update per frame.
pub fn wire_scroll_tracking(document: &web::Document, driver: &Rc<Driver>) {
    // Reflect the initial scroll position before the first event.
    let scroll_y = web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    update_navigation(document, scroll_y);

    let driver_update = driver.clone();
    let update = Closure::wrap(Box::new(move || {
        driver_update.nav_update_pending.set(false);
        let Some(doc) = dom::window_document() else {
            return;
        };
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        update_navigation(&doc, scroll_y);
    }) as Box<dyn FnMut()>);

    let driver_end = driver.clone();
    let scroll_end = Closure::wrap(Box::new(move || {
        driver_end.scroll_end_timeout.set(None);
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            let _ = body.class_list().remove_1(SCROLLING_CLASS);
        }
    }) as Box<dyn FnMut()>);

    let driver_listen = driver.clone();
    let listener = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        if !driver_listen.nav_update_pending.get()
            && window
                .request_animation_frame(update.as_ref().unchecked_ref())
                .is_ok()
        {
            driver_listen.nav_update_pending.set(true);
        }

        // Scroll-end detection: reset the timer on every event.
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            let _ = body.class_list().add_1(SCROLLING_CLASS);
        }
        if let Some(id) = driver_listen.scroll_end_timeout.take() {
            window.clear_timeout_with_handle(id);
        }
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                scroll_end.as_ref().unchecked_ref(),
                SCROLL_END_MS,
            )
            .ok();
        driver_listen.scroll_end_timeout.set(id);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
    listener.forget();
}

fn update_navigation(document: &web::Document, scroll_y: f64) {
    if let Ok(Some(navbar)) = document.query_selector(NAVBAR_SELECTOR) {
        if navbar_scrolled(scroll_y) {
            let _ = navbar.class_list().add_1(SCROLLED_CLASS);
        } else {
            let _ = navbar.class_list().remove_1(SCROLLED_CLASS);
        }
    }

    let mut bounds = Vec::new();
    dom::for_each_selected(document, SECTION_SELECTOR, |_, section| {
        if let Some(html) = section.dyn_ref::<web::HtmlElement>() {
            bounds.push(SectionBounds {
                id: section.id(),
                top: html.offset_top() as f64,
                height: section.client_height() as f64,
            });
        }
    });
    let target_href = active_section(&bounds, scroll_y).map(|id| format!("#{id}"));
    dom::for_each_selected(document, NAV_LINK_SELECTOR, |_, link| {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
        if let Some(href) = &target_href {
            if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }
    });
}
