use anyhow::anyhow;
use portal_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev))
            as Box<dyn FnMut(web::MouseEvent)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `handler` every `period_ms` for the lifetime of the page.
pub fn set_interval(period_ms: i32, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        );
    }
    closure.forget();
}

/// Run `handler` once the document has been parsed.
pub fn on_dom_ready(handler: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn viewport_size(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn inject_style(document: &web::Document, css: &str) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow!("no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("{:?}", e))?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Add `class` to every element matching `selector`.
pub fn add_class_all(document: &web::Document, selector: &str, class: &str) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            _ = el.class_list().add_1(class);
        }
    }
}
