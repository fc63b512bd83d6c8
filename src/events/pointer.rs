use crate::dom;
use glam::Vec2;
use portal_core::OrbField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record the last pointer position; the pointer timer reads it.
pub fn wire_pointer_tracking(field: Rc<RefCell<OrbField>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        field.borrow_mut().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the field's bounds in step with the window size.
pub fn wire_viewport_resize(field: Rc<RefCell<OrbField>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_for_size = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let viewport = dom::viewport_size(&window_for_size);
        log::debug!(
            "[resize] viewport={}x{}",
            viewport.width,
            viewport.height
        );
        field.borrow_mut().set_viewport(viewport);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
