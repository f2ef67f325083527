use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(1.0) as u32, h.max(1.0) as u32)
}

/// Size the canvas backing store to the viewport.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (width, height) = viewport_size(&w);
        canvas.set_width(width);
        canvas.set_height(height);
    }
}
