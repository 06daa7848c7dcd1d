use crate::constants::{GLITCH_CLASS, PULSE_CLASS, TITLE_ELEMENT_ID, TITLE_JITTER_TRANSFORM};
use crate::core::{
    TitleCycler, TitleEffect, TitleEntry, DEFAULT_TITLES, JITTER_REVERT_MS, TITLE_PULSE_MS,
};
use crate::driver::Driver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the rotating headline: one self-rescheduling timeout advances the
/// state machine, applying each step's text, accent and visual cue.
pub fn wire_title_rotation(document: &web::Document, driver: &Rc<Driver>) {
    let Some(el) = document.get_element_by_id(TITLE_ELEMENT_ID) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };

    let titles: Vec<TitleEntry> = DEFAULT_TITLES
        .iter()
        .map(|(text, accent)| TitleEntry::new(text, accent))
        .collect();

    // Reserve width for the longest title so the layout never shifts.
    let longest = titles
        .iter()
        .map(|t| t.text.chars().count())
        .max()
        .unwrap_or(0);
    let _ = el.style().set_property("--type-chars", &format!("{longest}ch"));

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let cycler = Rc::new(RefCell::new(TitleCycler::new(titles, seed)));

    // Persistent revert closures, reused for every jitter and pulse.
    let jitter_el = el.clone();
    let jitter_revert = Closure::wrap(Box::new(move || {
        let _ = jitter_el.style().remove_property("transform");
    }) as Box<dyn FnMut()>);
    let pulse_el = el.clone();
    let pulse_done = Closure::wrap(Box::new(move || {
        let _ = pulse_el.class_list().remove_1(PULSE_CLASS);
    }) as Box<dyn FnMut()>);

    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let step_clone = step.clone();
    let driver_step = driver.clone();
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let current = cycler.borrow_mut().step();
        el.set_text_content(Some(&current.text));
        let _ = el.style().set_property("--title-accent", &current.accent);
        let Some(window) = web::window() else {
            return;
        };
        match current.effect {
            TitleEffect::Jitter => {
                let _ = el.style().set_property("transform", TITLE_JITTER_TRANSFORM);
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    jitter_revert.as_ref().unchecked_ref(),
                    JITTER_REVERT_MS as i32,
                );
            }
            TitleEffect::Pulse => {
                let _ = el.class_list().add_1(PULSE_CLASS);
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    pulse_done.as_ref().unchecked_ref(),
                    TITLE_PULSE_MS as i32,
                );
            }
            TitleEffect::Glitch => {
                let _ = el.class_list().add_1(GLITCH_CLASS);
            }
            TitleEffect::None => {
                let _ = el.class_list().remove_1(GLITCH_CLASS);
            }
        }
        if let Some(cb) = step_clone.borrow().as_ref() {
            let id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    current.delay_ms as i32,
                )
                .ok();
            driver_step.title_timeout.set(id);
        }
    }) as Box<dyn FnMut()>));

    // First step fires on the next turn of the event loop.
    if let Some(window) = web::window() {
        if let Some(cb) = step.borrow().as_ref() {
            let id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    0,
                )
                .ok();
            driver.title_timeout.set(id);
        }
    }
    log::info!("[titles] rotation started");
}
