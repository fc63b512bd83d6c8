use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::dom;
use crate::stats::FrameStats;
use crate::AppContext;
use instant::Instant;
use portal_core::constants::POINTER_INTERVAL_MS;
use portal_core::OrbField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: AppContext,
    pub last_instant: Instant,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn new(app: AppContext) -> Self {
        Self {
            app,
            last_instant: Instant::now(),
            stats: FrameStats::new(FPS_LOG_INTERVAL_SEC),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.app.field.borrow_mut().tick();
        {
            let field = self.app.field.borrow();
            self.app.scene.borrow_mut().sync(&field);
        }

        if let Some(report) = self.stats.record(dt) {
            let field = self.app.field.borrow();
            let pointer = field.pointer();
            log::debug!(
                "[frame] fps={:.1} worst={:.1}ms orbs={} pointer=({:.0},{:.0})",
                report.fps,
                report.worst_frame_ms,
                field.len(),
                pointer.x,
                pointer.y
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Pointer attraction runs on its own fixed clock, independent of paint.
pub fn start_pointer_timer(field: Rc<RefCell<OrbField>>) {
    dom::set_interval(POINTER_INTERVAL_MS, move || {
        field.borrow_mut().apply_pointer_influence();
    });
}
