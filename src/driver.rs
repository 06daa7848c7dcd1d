use crate::core::ScrollAnimation;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The scroll animation currently owning the viewport, plus its clock.
pub struct ActiveScroll {
    pub anim: ScrollAnimation,
    pub started: Instant,
}

/// Per-page-session animation driver.
///
/// Owns the single active scroll slot, the frame-pending flags and every
/// long-lived timer handle, so nothing lives in module-level globals.
/// Constructed once at startup, torn down on page unload.
#[derive(Default)]
pub struct Driver {
    /// Overwriting this slot supersedes any in-flight scroll animation.
    pub scroll: RefCell<Option<ActiveScroll>>,
    /// Persistent frame stepper for the scroll animation.
    pub scroll_step: RefCell<Option<Closure<dyn FnMut()>>>,
    pub scroll_frame_pending: Cell<bool>,
    /// Guard so at most one navigation update is queued per frame.
    pub nav_update_pending: Cell<bool>,
    pub particle_interval: Cell<Option<i32>>,
    pub title_timeout: Cell<Option<i32>>,
    pub scroll_end_timeout: Cell<Option<i32>>,
}

impl Driver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Cancel every outstanding timer and drop the active animation.
    pub fn teardown(&self) {
        if let Some(window) = web::window() {
            if let Some(id) = self.particle_interval.take() {
                window.clear_interval_with_handle(id);
            }
            if let Some(id) = self.title_timeout.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Some(id) = self.scroll_end_timeout.take() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.scroll.borrow_mut().take();
    }
}

/// Tear the driver down when the page goes away.
pub fn wire_teardown(driver: &Rc<Driver>) {
    if let Some(window) = web::window() {
        let driver = driver.clone();
        let closure = Closure::wrap(Box::new(move || driver.teardown()) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
