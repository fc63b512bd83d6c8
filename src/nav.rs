use crate::constants::*;
use crate::{dom, overlay};
use portal_core::{hamburger_bars, NavState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct NavElements {
    hamburger: Option<web::Element>,
    container: Option<web::Element>,
}

impl NavElements {
    fn lookup(document: &web::Document) -> Self {
        Self {
            hamburger: document.get_element_by_id(HAMBURGER_ID),
            container: document.get_element_by_id(NAV_CONTAINER_ID),
        }
    }

    fn contains(el: &Option<web::Element>, target: Option<&web::Node>) -> bool {
        el.as_ref().map(|e| e.contains(target)).unwrap_or(false)
    }

    /// Reflect `state` in the container class and the hamburger bars.
    fn render(&self, state: NavState) {
        let Some(container) = &self.container else {
            return;
        };
        _ = container
            .class_list()
            .toggle_with_force(NAV_OPEN_CLASS, state.open);
        let Some(hamburger) = &self.hamburger else {
            return;
        };
        let Ok(spans) = hamburger.query_selector_all("span") else {
            return;
        };
        for (i, bar) in hamburger_bars(state.open).iter().enumerate() {
            let span = spans
                .item(i as u32)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok());
            if let Some(span) = span {
                let style = span.style();
                _ = style.set_property("transform", bar.transform);
                _ = style.set_property("opacity", bar.opacity);
            }
        }
    }
}

pub fn wire_navbar(document: &web::Document, nav: Rc<RefCell<NavState>>) {
    let elements = NavElements::lookup(document);

    {
        let nav = nav.clone();
        let elements = elements.clone();
        dom::add_click_listener(document, HAMBURGER_ID, move |_| {
            let open = nav.borrow_mut().toggle();
            elements.render(*nav.borrow());
            log::debug!("[nav] open={}", open);
        });
    }
    {
        let nav = nav.clone();
        let elements = elements.clone();
        dom::add_click_listener(document, CLOSE_NAV_ID, move |_| {
            nav.borrow_mut().close();
            elements.render(*nav.borrow());
        });
    }

    wire_outside_click(document, nav.clone(), elements.clone());
    wire_escape(document, nav.clone(), elements.clone());
    wire_anchor_links(document, nav, elements);
    wire_sign_in(document);
}

fn wire_outside_click(document: &web::Document, nav: Rc<RefCell<NavState>>, elements: NavElements) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside_nav = NavElements::contains(&elements.container, target.as_ref());
        let inside_hamburger = NavElements::contains(&elements.hamburger, target.as_ref());
        let changed = nav
            .borrow_mut()
            .on_outside_click(inside_nav, inside_hamburger);
        if changed {
            elements.render(*nav.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_escape(document: &web::Document, nav: Rc<RefCell<NavState>>, elements: NavElements) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" && nav.borrow_mut().on_escape() {
            elements.render(*nav.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// In-page `#anchor` links scroll smoothly and close the menu.
fn wire_anchor_links(document: &web::Document, nav: Rc<RefCell<NavState>>, elements: NavElements) {
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(href) = link.get_attribute("href").filter(|h| h.starts_with('#')) else {
            continue;
        };
        let doc = document.clone();
        let nav = nav.clone();
        let elements = elements.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            smooth_scroll_to(&doc, &href);
            nav.borrow_mut().close();
            elements.render(*nav.borrow());
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn smooth_scroll_to(document: &web::Document, selector: &str) {
    if let Ok(Some(target)) = document.query_selector(selector) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        options.set_block(web::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn wire_sign_in(document: &web::Document) {
    let on_signer_page = web::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| p.contains(SIGNER_PAGE))
        .unwrap_or(false);
    if on_signer_page {
        return;
    }
    let doc = document.clone();
    dom::add_click_listener(document, SIGN_IN_BUTTON_ID, move |ev| {
        ev.prevent_default();
        if overlay::is_hidden(&doc, AUTH_POPUP_ID) {
            overlay::show(&doc, AUTH_POPUP_ID);
            log::info!("[nav] sign-in popup opened");
        }
    });
    overlay::wire_close_buttons(document, AUTH_POPUP_ID, POPUP_CLOSE_SELECTOR);
    overlay::wire_backdrop_close(document, AUTH_POPUP_ID);
}
