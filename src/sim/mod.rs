//! Match simulation
//!
//! All gameplay logic lives here, with no rendering or platform
//! dependencies:
//! - One fixed tick per frame, velocities in px/s at `TICK_RATE`
//! - Trajectory math behind the `TrajectoryBackend` strategy
//! - Seeded RNG only

pub mod backend;
pub mod ball;
pub mod collision;
pub mod ffi;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use backend::{BackendKind, ForeignBackend, NativeBackend, Sector, TrajectoryBackend};
pub use ball::{Ball, BallEvent};
pub use collision::{Rect, ball_rect_collision};
pub use ffi::ForeignRoutines;
pub use paddle::{Controller, Paddle, PaddleInput};
pub use state::{
    Difficulty, Field, GameMode, MatchState, Player, PlayerCount, Scoreboard, Side,
};
pub use tick::{GameEvent, TickInput, tick};
pub use trajectory::TrajectoryMode;
