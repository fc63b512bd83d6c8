#![cfg(target_arch = "wasm32")]
use portal_core::{NavState, OrbField, OrbParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod glass;
mod nav;
mod overlay;
mod scene;
mod stats;
mod status;
mod style;

/// Everything the page's callbacks share. Cloned into each closure.
#[derive(Clone)]
pub struct AppContext {
    pub field: Rc<RefCell<OrbField>>,
    pub scene: Rc<RefCell<scene::OrbScene>>,
    pub nav: Rc<RefCell<NavState>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    dom::on_dom_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::inject_style(&document, style::HIDE_CSS_ORBS)?;

    let viewport = dom::viewport_size(&window);
    let field = OrbField::new(OrbParams::default(), viewport, rand::random());
    log::info!(
        "[orbs] count={} viewport={}x{}",
        field.len(),
        viewport.width,
        viewport.height
    );
    let mut scene = scene::OrbScene::new(document.clone());
    scene.sync(&field);

    let app = AppContext {
        field: Rc::new(RefCell::new(field)),
        scene: Rc::new(RefCell::new(scene)),
        nav: Rc::new(RefCell::new(NavState::default())),
    };

    glass::install(&document)?;

    events::wire_pointer_tracking(app.field.clone());
    events::wire_viewport_resize(app.field.clone());
    events::wire_global_keydown(app.field.clone());
    nav::wire_navbar(&document, app.nav.clone());
    status::start_status_checker(&document, constants::STATUS_URL);

    frame::start_pointer_timer(app.field.clone());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));

    Ok(())
}
