//! Paddles and their controllers

use glam::Vec2;

use super::collision::Rect;
use super::state::{Field, Side};
use crate::consts::{PADDLE_HEIGHT, PADDLE_PADDING, PADDLE_SPEED, PADDLE_WIDTH};

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    /// Tracks the ball while it is in this paddle's half
    Ai,
}

/// Held movement keys for one paddle this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    /// px per tick
    pub speed: f32,
    /// Gap kept to the field edges
    pub padding: f32,
    pub side: Side,
    pub controller: Controller,
    field: Field,
}

impl Paddle {
    /// A paddle vertically centred at its edge of the field
    pub fn new(side: Side, controller: Controller, field: Field) -> Self {
        let x = match side {
            Side::Left => PADDLE_PADDING,
            Side::Right => field.width - PADDLE_PADDING - PADDLE_WIDTH,
        };
        let y = field.height / 2.0 - PADDLE_HEIGHT / 2.0;

        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            padding: PADDLE_PADDING,
            side,
            controller,
            field,
        }
    }

    /// One tick of movement.
    ///
    /// Humans follow `input`, up winning over down. The AI ignores `input`
    /// and only moves while the ball is in its half.
    pub fn update(&mut self, input: PaddleInput, ball_pos: Vec2) {
        match self.controller {
            Controller::Human => {
                if input.up {
                    self.rect.y -= self.speed;
                } else if input.down {
                    self.rect.y += self.speed;
                }
            }
            Controller::Ai => {
                if !self.owns_half(ball_pos) {
                    return;
                }
                let center = self.rect.center().y;
                if center > ball_pos.y {
                    self.rect.y -= self.speed;
                } else if center < ball_pos.y {
                    self.rect.y += self.speed;
                }
            }
        }
        self.limit_movement();
    }

    /// Whether `pos` lies strictly inside this paddle's half of the field
    pub fn owns_half(&self, pos: Vec2) -> bool {
        let mid = self.field.width / 2.0;
        match self.side {
            Side::Left => pos.x < mid,
            Side::Right => pos.x > mid,
        }
    }

    /// Keep the paddle between the top and bottom padding
    pub fn limit_movement(&mut self) {
        let min = self.padding;
        let max = self.field.height - self.rect.h - self.padding;
        self.rect.y = self.rect.y.clamp(min, max);
    }
}
