//! Animated starfield background for a personal site.
//!
//! The animation core (`core`, `config`, `typewriter`, `input`, `cards`) is plain Rust
//! and runs anywhere; the browser wiring (canvas surface, event handlers,
//! `requestAnimationFrame` loop, page glue) is compiled for `wasm32` only.

pub mod cards;
pub mod config;
pub mod constants;
pub mod core;
pub mod input;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod page;

pub use config::{ConfigError, SceneConfig};

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas::CanvasSurface;
    use crate::config::SceneConfig;
    use crate::core::{CancelToken, FrameScheduler, Scene};
    use crate::{dom, events, frame, page};
    use glam::Vec2;
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    const CANVAS_ID: &str = "particleCanvas";

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("starfield starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Page glue does not need the canvas.
        page::start_typewriter(&document);
        page::duplicate_carousel(&document);
        page::wire_hover_preview(&document);
        page::wire_active_cards(&document);

        let canvas_el = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
        let config = match SceneConfig::from_attributes(|name| canvas_el.get_attribute(name)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("[config] {}; using defaults", e);
                SceneConfig::default()
            }
        };
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        dom::sync_canvas_to_viewport(&canvas);
        let surface = CanvasSurface::new(canvas.clone())?;
        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);

        let token = CancelToken::new();
        let scheduler = Rc::new(RefCell::new(FrameScheduler::new(
            Scene::new(config, bounds),
            token.clone(),
        )));

        events::wire_input_handlers(events::InputWiring {
            canvas,
            scheduler: scheduler.clone(),
            token,
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            scheduler,
            surface,
            stats_since: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
