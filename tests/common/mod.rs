// Shared helpers for host-side tests: a surface that records draw calls.

#![allow(dead_code)]
use glam::Vec2;
use starfield::core::{Color, RenderSurface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        glow: f32,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        alpha: f32,
        width: f32,
    },
}

pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32, alpha: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            glow,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, alpha: f32, width: f32) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            alpha,
            width,
        });
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
