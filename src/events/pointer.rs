use crate::core::{CancelToken, FrameScheduler};
use crate::dom;
use crate::input;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scheduler: Rc<RefCell<FrameScheduler<StdRng>>>,
    pub token: CancelToken,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_resize(&w);
    wire_pagehide(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let added = w
            .scheduler
            .borrow_mut()
            .scene_mut()
            .on_pointer_move(pos.x, pos.y);
        log::trace!("[pointer] ({:.0},{:.0}) +{} sparkles", pos.x, pos.y, added);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// Existing particles keep their positions; only the surface changes size.
fn wire_resize(w: &InputWiring) {
    let canvas = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_viewport(&canvas);
        log::debug!("[resize] canvas {}x{}", canvas.width(), canvas.height());
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pagehide(w: &InputWiring) {
    let token = w.token.clone();

    // A persisted page may come back from the back/forward cache, keep it alive.
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        log::info!("[frame] page unloading, stopping animation");
        token.cancel();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
