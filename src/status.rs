use crate::constants::*;
use crate::dom;
use portal_core::{CheckGeneration, ConnectionStatus};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Header badge showing whether the signing API answers.
pub struct StatusBadge {
    container: Option<web::Element>,
    text: Option<web::Element>,
    blurb: Option<web::Element>,
    generation: Cell<CheckGeneration>,
}

impl StatusBadge {
    pub fn lookup(document: &web::Document) -> Self {
        Self {
            container: document.get_element_by_id(STATUS_CONTAINER_ID),
            text: document.get_element_by_id(STATUS_TEXT_ID),
            blurb: document.query_selector(API_STATUS_SELECTOR).ok().flatten(),
            generation: Cell::new(CheckGeneration::default()),
        }
    }

    pub fn render(&self, status: ConnectionStatus) {
        let (Some(container), Some(text)) = (&self.container, &self.text) else {
            return;
        };
        let classes = container.class_list();
        for s in ConnectionStatus::ALL {
            _ = classes.remove_1(s.css_class());
        }
        _ = classes.add_1(status.css_class());
        text.set_text_content(Some(status.label()));
        if let Some(blurb) = &self.blurb {
            blurb.set_text_content(Some(status.api_blurb()));
        }
        if let Ok(Some(icon)) = container.query_selector("i") {
            icon.set_class_name("fas fa-circle");
        }
    }

    fn begin_check(&self) -> u64 {
        let mut generation = self.generation.get();
        let ticket = generation.begin();
        self.generation.set(generation);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.get().is_current(ticket)
    }
}

/// Fire a `HEAD` at `url`. Opaque (`no-cors`) responses still count as reachable.
async fn ping(url: &str) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let init = web::RequestInit::new();
    init.set_method("HEAD");
    init.set_mode(web::RequestMode::NoCors);
    init.set_cache(web::RequestCache::NoCache);
    match JsFuture::from(window.fetch_with_str_and_init(url, &init)).await {
        Ok(_) => true,
        Err(e) => {
            log::info!("[status] connection check failed: {:?}", e);
            false
        }
    }
}

fn check(badge: Rc<StatusBadge>, url: &'static str) {
    let ticket = badge.begin_check();
    badge.render(ConnectionStatus::Checking);
    spawn_local(async move {
        let status = ConnectionStatus::from_reachable(ping(url).await);
        if !badge.is_current(ticket) {
            log::debug!("[status] dropping stale result {:?} (check {})", status, ticket);
            return;
        }
        log::debug!("[status] {:?}", status);
        badge.render(status);
    });
}

/// Check now, on a fixed period, and whenever the tab becomes visible again.
pub fn start_status_checker(document: &web::Document, url: &'static str) {
    let badge = Rc::new(StatusBadge::lookup(document));
    check(badge.clone(), url);

    let badge_interval = badge.clone();
    dom::set_interval(STATUS_INTERVAL_MS, move || check(badge_interval.clone(), url));

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !doc.hidden() {
            check(badge.clone(), url);
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
