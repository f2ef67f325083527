use crate::canvas::CanvasSurface;
use crate::constants::STATS_INTERVAL_FRAMES;
use crate::core::FrameScheduler;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scheduler: Rc<RefCell<FrameScheduler<StdRng>>>,
    pub surface: CanvasSurface,
    pub stats_since: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) -> ControlFlow<()> {
        let mut scheduler = self.scheduler.borrow_mut();
        scheduler.tick(&mut self.surface)?;

        let frames = scheduler.frames();
        if frames % STATS_INTERVAL_FRAMES == 0 {
            let now = Instant::now();
            let secs = (now - self.stats_since).as_secs_f32();
            self.stats_since = now;
            let registry = scheduler.scene().registry();
            log::debug!(
                "[frame] #{} particles={} sparkles={} fps={:.1}",
                frames,
                registry.len(),
                registry.sparkle_count(),
                STATS_INTERVAL_FRAMES as f32 / secs.max(1e-3)
            );
        }
        ControlFlow::Continue(())
    }
}

/// Run `frame_ctx` on every animation frame until its scheduler is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame().is_break() {
            log::info!("[frame] loop stopped");
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
