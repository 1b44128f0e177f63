//! Path Pong - classic two-paddle Pong with selectable ball paths
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (ball paths, paddles, collisions, scoring)
//! - `bench`: Calculation-time accounting for backend comparison
//! - `renderer`: Canvas abstraction and macroquad drawing
//! - `platform`: Input polling and frame pacing
//! - `persistence`: Append-only timing log
//! - `ui`: Login screen and main menu state machines

pub mod bench;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use bench::BenchmarkContext;
pub use error::{PongError, Result};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const GAME_NAME: &str = "PONG";

    /// Field dimensions (the window is exactly the field)
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Simulation ticks per second. One tick per rendered frame.
    pub const TICK_RATE: f32 = 60.0;
    pub const TARGET_FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity of the decorative login-screen balls (px/s)
    pub const DECORATIVE_SPEED: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap kept between a paddle and the field edges
    pub const PADDLE_PADDING: f32 = 5.0;

    /// Angular frequency of the sinusoidal path (radians per tick)
    pub const SIN_FREQUENCY: f32 = 0.05;
    /// Strength of the attractor curve
    pub const CURVE_CONSTANT: f32 = 1000.0;
    /// Squared distance from center below which the curve is switched off
    pub const CURVE_DEAD_ZONE: f32 = 25.0;

    /// Decorative center accent
    pub const ACCENT_RADIUS: f32 = 128.0;
    pub const ACCENT_STEP: f32 = 0.1;

    /// Number of pinwheel segments drawn on the ball
    pub const BALL_SEGMENTS: u32 = 6;
    /// Pinwheel rotation per tick (radians)
    pub const BALL_SPIN: f32 = 0.1;

    /// Text limits
    pub const NAME_MAX_CHARS: usize = 19;
    pub const TEXT_MAX_CHARS: usize = 99;
}

/// Convert polar (r, theta) around `origin` to cartesian (x, y)
#[inline]
pub fn polar_offset(origin: Vec2, r: f32, theta: f32) -> Vec2 {
    origin + Vec2::new(r * theta.cos(), r * theta.sin())
}
