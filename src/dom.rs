use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` over every element matching `selector`, in document order.
pub fn for_each_selected(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(usize, web::Element),
) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                f(i as usize, el);
            }
        }
    }
}

/// Attach a click handler to the first element matching `selector`.
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn clear_style(el: &web::Element, property: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

/// Remove `el` from the document after `delay_ms`. One-shot: the callback
/// frees its closure after running.
pub fn remove_after(el: &web::Element, delay_ms: i32) {
    let el = el.clone();
    let removal = wasm_bindgen::closure::Closure::once_into_js(move || el.remove());
    if let Some(window) = web::window() {
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(removal.unchecked_ref(), delay_ms);
    }
}
