use crate::constants::HIDDEN_CLASS;
use portal_core::backdrop_click_dismisses;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // the popup stylesheet hides it with display:none as well
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("display", "block");
        }
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("display", "none");
        }
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Hide the popup when any of its `selector` children is clicked.
pub fn wire_close_buttons(document: &web::Document, id: &str, selector: &str) {
    let Some(popup) = document.get_element_by_id(id) else {
        return;
    };
    let Ok(buttons) = popup.query_selector_all(selector) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i) else {
            continue;
        };
        let doc = document.clone();
        let popup_id = id.to_string();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            hide(&doc, &popup_id);
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Hide the popup when a click lands on its backdrop, the full-screen popup
/// element itself rather than anything inside it.
pub fn wire_backdrop_close(document: &web::Document, id: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(popup) = document.get_element_by_id(id) else {
        return;
    };
    let doc = document.clone();
    let popup_id = id.to_string();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let on_backdrop = popup.is_same_node(target.as_ref());
        if backdrop_click_dismisses(on_backdrop, !is_hidden(&doc, &popup_id)) {
            hide(&doc, &popup_id);
            log::debug!("[overlay] {} dismissed from backdrop", popup_id);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
