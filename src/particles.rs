use crate::constants::PARTICLE_CONTAINER_ID;
use crate::core::{
    steady_state_count, Particle, ParticleSpawner, PARTICLE_LIFETIME_MS, PARTICLE_SPAWN_INTERVAL_MS,
};
use crate::dom;
use crate::driver::Driver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ambient particle stream: one spawn per interval, each particle removed
/// after a fixed lifetime so the container count stays bounded.
pub fn wire_particles(document: &web::Document, driver: &Rc<Driver>) {
    let Some(container) = document.get_element_by_id(PARTICLE_CONTAINER_ID) else {
        return;
    };
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let spawner = RefCell::new(ParticleSpawner::new(seed));
    let spawn = Closure::wrap(Box::new(move || {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let particle = spawner.borrow_mut().spawn();
        spawn_particle(&doc, &container, &particle);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            spawn.as_ref().unchecked_ref(),
            PARTICLE_SPAWN_INTERVAL_MS as i32,
        ) {
            driver.particle_interval.set(Some(id));
        }
    }
    spawn.forget();
    log::info!(
        "[particles] spawning every {}ms, steady-state ~{} live",
        PARTICLE_SPAWN_INTERVAL_MS,
        steady_state_count(PARTICLE_SPAWN_INTERVAL_MS, PARTICLE_LIFETIME_MS)
    );
}

fn spawn_particle(document: &web::Document, container: &web::Element, particle: &Particle) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name("particle");
    dom::set_style(&el, "left", &format!("{:.2}%", particle.left_percent));
    dom::set_style(
        &el,
        "animation-duration",
        &format!("{:.2}s", particle.drift_secs),
    );
    if container.append_child(&el).is_ok() {
        dom::remove_after(&el, PARTICLE_LIFETIME_MS as i32);
    }
}
