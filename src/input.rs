use crate::constants::PREVIEW_OFFSET_PX;
use glam::Vec2;

/// Map a CSS-pixel offset inside an element of `css_size` to canvas backing
/// pixels. A collapsed element maps straight through.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, canvas_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * canvas_size
    } else {
        css
    }
}

/// Top-left corner for the project preview, trailing the pointer.
#[inline]
pub fn preview_position(client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x + PREVIEW_OFFSET_PX, client_y + PREVIEW_OFFSET_PX)
}

// ---------------- Browser helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web_sys::MouseEvent, canvas: &web_sys::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_canvas_px(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
