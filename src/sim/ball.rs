//! The ball: motion, walls, scoring edges, corners and paddle bounces

use glam::Vec2;
use rand::Rng;

use super::backend::TrajectoryBackend;
use super::collision::ball_rect_collision;
use super::paddle::Paddle;
use super::state::{Difficulty, Field, Scoreboard, Side};
use super::trajectory::TrajectoryMode;
use crate::bench::BenchmarkContext;
use crate::consts::{BALL_RADIUS, DECORATIVE_SPEED, TICK_RATE};

/// Something the ball did this tick that the loop may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// The ball left the field; `Side` is the player who got the point
    Scored(Side),
    /// The ball touched a corner and was re-served
    Cornered,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// px/s at the configured tick rate
    pub vel: Vec2,
    /// px/s², folded into `vel` once per tick
    pub accel: Vec2,
    pub radius: f32,
    pub path: TrajectoryMode,
    pub difficulty: Difficulty,
    /// Ticks since creation; phase input of the sine path
    pub tick: u64,
    pub field: Field,
}

impl Ball {
    /// Ball at the field center with the given motion
    pub fn with_motion(
        field: Field,
        path: TrajectoryMode,
        difficulty: Difficulty,
        vel: Vec2,
        accel: Vec2,
    ) -> Self {
        Self {
            pos: field.center(),
            vel,
            accel,
            radius: BALL_RADIUS,
            path,
            difficulty,
            tick: 0,
            field,
        }
    }

    /// Match ball: speed from the difficulty table, random quadrant
    pub fn serve<R: Rng + ?Sized>(
        field: Field,
        path: TrajectoryMode,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Self {
        let mut ball = Self::with_motion(field, path, difficulty, Vec2::ZERO, Vec2::ZERO);
        ball.choose(rng);
        ball.reset();
        ball
    }

    /// Background ball for the login screen: fixed speed, no acceleration,
    /// random path
    pub fn decorative<R: Rng + ?Sized>(field: Field, rng: &mut R) -> Self {
        let path = TrajectoryMode::ALL[rng.random_range(0..TrajectoryMode::ALL.len())];
        Self::with_motion(
            field,
            path,
            Difficulty::Easy,
            Vec2::splat(DECORATIVE_SPEED),
            Vec2::ZERO,
        )
    }

    /// Advance one tick.
    ///
    /// With a scoreboard, leaving through the left or right edge scores for
    /// the opposite player and recentres the ball. Without one, the ball
    /// bounces off all four walls.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        backend: &dyn TrajectoryBackend,
        bench: &mut BenchmarkContext,
        rng: &mut R,
        scorers: Option<&mut Scoreboard>,
    ) -> Option<BallEvent> {
        bench.record(|| self.integrate(backend));

        let mut event = None;
        match scorers {
            Some(board) => {
                if self.pos.x - self.radius <= 0.0 {
                    board.award(Side::Right);
                    self.reset();
                    event = Some(BallEvent::Scored(Side::Right));
                } else if self.pos.x + self.radius >= self.field.width {
                    board.award(Side::Left);
                    self.reset();
                    event = Some(BallEvent::Scored(Side::Left));
                }
            }
            None => {
                if self.pos.x - self.radius <= 0.0 {
                    self.pos.x = self.radius;
                    self.vel.x = -self.vel.x;
                } else if self.pos.x + self.radius >= self.field.width {
                    self.pos.x = self.field.width - self.radius;
                    self.vel.x = -self.vel.x;
                }
            }
        }

        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
        } else if self.pos.y + self.radius >= self.field.height {
            self.pos.y = self.field.height - self.radius;
            self.vel.y = -self.vel.y;
        }

        // Reflection above runs first; a ball clamped into a corner is re-served
        if self.is_cornered() {
            self.reset();
            self.choose(rng);
            event = Some(BallEvent::Cornered);
        }

        event
    }

    /// Velocity update, path displacement, tick counter
    fn integrate(&mut self, backend: &dyn TrajectoryBackend) {
        self.vel += self.accel / TICK_RATE;
        let path = self.path;
        let delta = path.delta(backend, self, TICK_RATE);
        self.pos += delta;
        self.tick += 1;
    }

    /// Back to the field center. Velocity and acceleration are kept.
    pub fn reset(&mut self) {
        self.pos = self.field.center();
    }

    /// Fresh velocity/acceleration from the difficulty table, with an
    /// independent random sign on each velocity axis
    pub fn choose<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.vel = Vec2::splat(self.difficulty.base_speed());
        self.accel = Vec2::splat(self.difficulty.base_accel());

        if rng.random_bool(0.5) {
            self.vel.x = -self.vel.x;
        }
        if rng.random_bool(0.5) {
            self.vel.y = -self.vel.y;
        }
    }

    /// Touching a vertical and a horizontal edge at once
    pub fn is_cornered(&self) -> bool {
        let x_edge = self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= self.field.width;
        let y_edge = self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= self.field.height;
        x_edge && y_edge
    }

    /// Horizontal bounce off a paddle. The ball is not pushed out, so an
    /// overlap that lasts several ticks flips `vel.x` on each of them.
    pub fn collide_with_paddle(&mut self, paddle: &Paddle) -> bool {
        let hit = ball_rect_collision(self.pos, self.radius, &paddle.rect);
        if hit {
            self.vel.x = -self.vel.x;
        }
        hit
    }
}
