use portal_core::{OrbCommand, OrbField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, field: &Rc<RefCell<OrbField>>) {
    let key = ev.key();
    let Some(command) = OrbCommand::for_key(&key) else {
        return;
    };
    let mut field = field.borrow_mut();
    if command.apply(&mut field) {
        log::info!("[keys] {:?} (orbs={})", command, field.len());
    }
}

pub fn wire_global_keydown(field: Rc<RefCell<OrbField>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &field);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
