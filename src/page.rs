use crate::cards::{carousel_passes, last_intersecting};
use crate::constants::{
    ACTIVE_CARD_CLASS, ACTIVE_CARD_THRESHOLD, CAROUSEL_TRACK_ID, SKILLS_TRACK_ID, TYPEWRITER_WORDS,
};
use crate::input;
use crate::typewriter::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type TimerCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cycle the typewriter words inside `#typewriter`, if the page has one.
pub fn start_typewriter(document: &web::Document) {
    let Some(el) = document.get_element_by_id("typewriter") else {
        log::debug!("[page] no #typewriter element");
        return;
    };
    let Some(typewriter) = Typewriter::new(TYPEWRITER_WORDS) else {
        return;
    };
    let typewriter = Rc::new(RefCell::new(typewriter));

    let tick: TimerCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let step = typewriter.borrow_mut().step();
        el.set_text_content(Some(step.text.as_str()));
        schedule(&tick_clone, step.delay_ms);
    }) as Box<dyn FnMut()>));
    schedule(&tick, 0);
}

fn schedule(tick: &TimerCallback, delay_ms: u32) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            log::warn!("[page] setTimeout failed: {:?}", e);
        }
    }
}

/// Append deep copies of the track's cards so the CSS marquee loops without a
/// gap. Each pass copies everything present at the start of that pass.
pub fn duplicate_carousel(document: &web::Document) {
    let Some((track, id)) = [SKILLS_TRACK_ID, CAROUSEL_TRACK_ID]
        .into_iter()
        .find_map(|id| document.get_element_by_id(id).map(|el| (el, id)))
    else {
        return;
    };
    let passes = carousel_passes(id);
    for _ in 0..passes {
        let children = track.children();
        let cards: Vec<web::Element> = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        for card in &cards {
            match card.clone_node_with_deep(true) {
                Ok(copy) => {
                    _ = track.append_child(&copy);
                }
                Err(e) => log::warn!("[page] could not clone carousel card: {:?}", e),
            }
        }
    }
    log::debug!(
        "[page] #{} now holds {} cards after {} passes",
        id,
        track.child_element_count(),
        passes
    );
}

/// Floating project image: follows the pointer and shows the hovered
/// project's `data-img`.
pub fn wire_hover_preview(document: &web::Document) {
    let Some(preview) = document
        .get_element_by_id("project-hover-image")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    {
        let preview = preview.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let (x, y) = input::preview_position(ev.client_x() as f64, ev.client_y() as f64);
            let style = preview.style();
            _ = style.set_property("left", &format!("{}px", x));
            _ = style.set_property("top", &format!("{}px", y));
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    let items = match document.query_selector_all(".project-item") {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[page] .project-item query failed: {:?}", e);
            return;
        }
    };
    for i in 0..items.length() {
        let Some(item) = items.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };

        let enter_preview = preview.clone();
        let enter_item = item.clone();
        let enter = Closure::wrap(Box::new(move || {
            let style = enter_preview.style();
            if let Some(img) = enter_item.get_attribute("data-img") {
                _ = style.set_property("background-image", &format!("url({})", img));
            }
            _ = style.set_property("opacity", "1");
            _ = style.set_property("transform", "scale(1)");
        }) as Box<dyn FnMut()>);

        let leave_preview = preview.clone();
        let leave = Closure::wrap(Box::new(move || {
            let style = leave_preview.style();
            _ = style.set_property("opacity", "0");
            _ = style.set_property("transform", "scale(0.8)");
        }) as Box<dyn FnMut()>);

        _ = item.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        _ = item.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        enter.forget();
        leave.forget();
    }
}

/// Move the active class onto whichever `.project-card` scrolls into view.
pub fn wire_active_cards(document: &web::Document) {
    let nodes = match document.query_selector_all(".project-card") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("[page] .project-card query failed: {:?}", e);
            return;
        }
    };
    let project_cards: Vec<web::Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if project_cards.is_empty() {
        return;
    }

    let all = project_cards.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|e| (e.target(), e.is_intersecting()));
            if let Some(target) = last_intersecting(batch) {
                for card in &all {
                    _ = card.class_list().remove_1(ACTIVE_CARD_CLASS);
                }
                _ = target.class_list().add_1(ACTIVE_CARD_CLASS);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ACTIVE_CARD_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[page] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    for card in &project_cards {
        observer.observe(card);
    }
    callback.forget();
    log::debug!("[page] observing {} project cards", project_cards.len());
}
