#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod counters;
mod dom;
mod driver;
mod events;
mod input;
mod menu;
mod particles;
mod reveal;
mod titles;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let driver = driver::Driver::new();
    driver::wire_teardown(&driver);

    // Navigation and scrolling
    events::wire_anchor_links(&document, &driver);
    events::wire_scroll_tracking(&document, &driver);
    menu::wire(&document);

    // Timed effects
    titles::wire_title_rotation(&document, &driver);
    counters::wire_counters(&document);
    particles::wire_particles(&document, &driver);

    // Visibility-driven reveals
    reveal::stagger_card_entrances(&document);
    reveal::wire_scroll_effects(&document);
    reveal::wire_reveal(&document);

    // Pointer effects
    events::wire_card_tilt(&document);
    events::wire_stat_hover(&document);
    events::wire_timeline_hover(&document);
    events::wire_skill_ripples(&document);
    events::wire_floating_boxes(&document);
    events::wire_parallax(&document);

    // Native smooth scrolling covers anything the animator does not.
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = root.style().set_property("scroll-behavior", "smooth");
    }

    Ok(())
}
