//! Rendering
//!
//! Scene code draws through the [`Canvas`] capability trait; [`quad`] maps
//! it onto macroquad. Tests use a recording canvas instead.

pub mod palette;
pub mod quad;
pub mod scene;

use glam::Vec2;

use crate::sim::Rect;

pub use quad::MacroquadCanvas;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Immediate-mode drawing surface
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba);
    /// Pie slice between two angles in radians, clockwise on screen
    fn fill_sector(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    /// `top_left` is the top of the glyph box, not the baseline
    fn text(&mut self, text: &str, top_left: Vec2, size: f32, color: Rgba);
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
