//! macroquad-backed canvas

use glam::Vec2;
use macroquad::prelude as mq;

use super::{Canvas, Rgba};
use crate::sim::Rect;

/// Triangles per filled sector
const SECTOR_STEPS: u32 = 8;

fn color(c: Rgba) -> mq::Color {
    mq::Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Draws straight to the current macroquad frame
#[derive(Debug, Default)]
pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, c: Rgba) {
        mq::clear_background(color(c));
    }

    fn fill_rect(&mut self, rect: Rect, c: Rgba) {
        mq::draw_rectangle(rect.x, rect.y, rect.w, rect.h, color(c));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, c: Rgba) {
        mq::draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color(c));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, c: Rgba) {
        mq::draw_circle(center.x, center.y, radius, color(c));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, c: Rgba) {
        mq::draw_circle_lines(center.x, center.y, radius, thickness, color(c));
    }

    fn fill_sector(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32, c: Rgba) {
        let step = (end_angle - start_angle) / SECTOR_STEPS as f32;
        let hub = mq::vec2(center.x, center.y);
        let rim = |angle: f32| mq::vec2(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        for k in 0..SECTOR_STEPS {
            let a0 = start_angle + step * k as f32;
            mq::draw_triangle(hub, rim(a0), rim(a0 + step), color(c));
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, c: Rgba) {
        mq::draw_line(from.x, from.y, to.x, to.y, thickness, color(c));
    }

    fn text(&mut self, text: &str, top_left: Vec2, size: f32, c: Rgba) {
        let dims = mq::measure_text(text, None, size as u16, 1.0);
        mq::draw_text(text, top_left.x, top_left.y + dims.offset_y, size, color(c));
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        mq::measure_text(text, None, size as u16, 1.0).width
    }
}
