//! Particle, streak and page tuning constants.
//!
//! These constants express intended behavior (population sizes, per-frame
//! rates, value ranges) and keep magic numbers out of the animation code.
use crate::core::Color;

// Population
pub const AMBIENT_COUNT: usize = 400;
pub const SPARKLES_PER_MOVE: usize = 16;
pub const SPARKLE_CAP: usize = 2048; // ~128 bursts alive at once

// Radius ranges (half-open)
pub const AMBIENT_RADIUS_MIN: f32 = 0.1;
pub const AMBIENT_RADIUS_MAX: f32 = 1.6;
pub const SPARKLE_RADIUS_MIN: f32 = 0.1;
pub const SPARKLE_RADIUS_MAX: f32 = 2.6;

// Per-frame displacement on each axis is drawn from [-SPEED_SPAN, SPEED_SPAN)
pub const SPEED_SPAN: f32 = 0.5;

// Opacity dynamics (per frame)
pub const SPARKLE_FADE_RATE: f32 = 0.015;
pub const BLINK_RATE_MIN: f32 = 0.005;
pub const BLINK_RATE_MAX: f32 = 0.02;

// Glow (shadow blur) strength
pub const SPARKLE_GLOW: f32 = 10.0;
pub const AMBIENT_GLOW: f32 = 5.0;

// Palette
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const SPARKLE_PALETTE: [Color; 4] = [
    WHITE,
    Color::rgb(0x00, 0xd2, 0xff), // cyan
    Color::rgb(0xba, 0x68, 0xc8), // purple
    Color::rgb(0xff, 0xf9, 0xc4), // pale yellow
];

// Shooting star
pub const STREAK_FADE_STEP: f32 = 0.01;
pub const STREAK_FADE_EPSILON: f32 = 1e-4; // absorbs f32 drift so a cycle is exactly 100 frames
pub const STREAK_LENGTH_MIN: f32 = 50.0;
pub const STREAK_LENGTH_MAX: f32 = 130.0;
pub const STREAK_SPEED_MIN: f32 = 5.0;
pub const STREAK_SPEED_MAX: f32 = 15.0;
pub const STREAK_LINE_WIDTH: f32 = 2.0;

// Diagnostics
pub const STATS_INTERVAL_FRAMES: u64 = 600;

// Page glue
pub const PREVIEW_OFFSET_PX: f64 = 20.0;
pub const TYPEWRITER_WORDS: [&str; 3] =
    ["Web Developer", "Tech Enthusiast", "Creative Problem Solver"];
pub const TYPE_DELAY_MS: u32 = 200;
pub const DELETE_DELAY_MS: u32 = 100;
pub const WORD_HOLD_MS: u32 = 2000;
pub const WORD_GAP_MS: u32 = 500;
pub const SKILLS_TRACK_ID: &str = "skillsTrack";
pub const CAROUSEL_TRACK_ID: &str = "carouselTrack";
pub const ACTIVE_CARD_CLASS: &str = "active";
pub const ACTIVE_CARD_THRESHOLD: f64 = 0.6; // fraction of the card that must be visible
