//! Ball paths
//!
//! Each mode turns the ball's current velocity into a per-tick displacement.
//! The arithmetic itself is delegated to the active [`TrajectoryBackend`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::backend::TrajectoryBackend;
use super::ball::Ball;

/// Motion law for the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrajectoryMode {
    /// Straight lines between bounces
    #[default]
    Linear,
    /// Vertical travel scaled by a slow sine of the tick counter
    SinModulated,
    /// Vertical acceleration bent by the offset from the field center
    AttractorCurve,
}

impl TrajectoryMode {
    pub const ALL: [TrajectoryMode; 3] = [
        TrajectoryMode::Linear,
        TrajectoryMode::SinModulated,
        TrajectoryMode::AttractorCurve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrajectoryMode::Linear => "Regular",
            TrajectoryMode::SinModulated => "Sin",
            TrajectoryMode::AttractorCurve => "Curve",
        }
    }

    /// Displacement for this tick.
    ///
    /// Expects the tick's velocity update to have been applied already.
    /// `AttractorCurve` also folds its correction into `ball.accel.y`, which
    /// only takes effect on the next tick's velocity update.
    pub fn delta(self, backend: &dyn TrajectoryBackend, ball: &mut Ball, tick_rate: f32) -> Vec2 {
        match self {
            TrajectoryMode::Linear => Vec2::new(
                backend.linear_delta(ball.vel.x, tick_rate),
                backend.linear_delta(ball.vel.y, tick_rate),
            ),
            TrajectoryMode::SinModulated => Vec2::new(
                backend.linear_delta(ball.vel.x, tick_rate),
                backend.sin_delta(ball.vel.y, ball.tick, tick_rate),
            ),
            TrajectoryMode::AttractorCurve => {
                ball.accel.y += backend.curve_correction(ball.pos, ball.field.center());
                Vec2::new(
                    backend.linear_delta(ball.vel.x, tick_rate),
                    backend.linear_delta(ball.vel.y, tick_rate),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_RATE;
    use crate::sim::{Difficulty, Field, NativeBackend};

    fn ball_at(pos: Vec2, vel: Vec2, mode: TrajectoryMode) -> Ball {
        let mut ball = Ball::with_motion(Field::default(), mode, Difficulty::Easy, vel, Vec2::ZERO);
        ball.pos = pos;
        ball
    }

    #[test]
    fn test_linear_both_axes() {
        let mut ball = ball_at(Vec2::new(640.0, 400.0), Vec2::new(300.0, -60.0), TrajectoryMode::Linear);
        let d = TrajectoryMode::Linear.delta(&NativeBackend, &mut ball, TICK_RATE);
        assert!((d - Vec2::new(5.0, -1.0)).length() < 1e-5);
        assert_eq!(ball.accel, Vec2::ZERO);
    }

    #[test]
    fn test_sin_only_modulates_vertical() {
        let mut ball = ball_at(Vec2::new(640.0, 400.0), Vec2::new(300.0, 300.0), TrajectoryMode::SinModulated);
        ball.tick = 0;
        let d = TrajectoryMode::SinModulated.delta(&NativeBackend, &mut ball, TICK_RATE);
        assert!((d.x - 5.0).abs() < 1e-5);
        assert_eq!(d.y, 0.0);

        ball.tick = 10;
        let d = TrajectoryMode::SinModulated.delta(&NativeBackend, &mut ball, TICK_RATE);
        assert!((d.y - 5.0 * (0.5f32).sin()).abs() < 1e-5);
    }

    #[test]
    fn test_curve_accumulates_into_accel() {
        let mut ball = ball_at(Vec2::new(640.0, 500.0), Vec2::new(300.0, 0.0), TrajectoryMode::AttractorCurve);
        let d = TrajectoryMode::AttractorCurve.delta(&NativeBackend, &mut ball, TICK_RATE);
        // Displacement uses the velocity as it was, the correction lands in accel
        assert_eq!(d.y, 0.0);
        assert!((ball.accel.y - 10.0).abs() < 1e-4);

        TrajectoryMode::AttractorCurve.delta(&NativeBackend, &mut ball, TICK_RATE);
        assert!((ball.accel.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_curve_dead_zone_leaves_accel() {
        let mut ball = ball_at(Vec2::new(642.0, 402.0), Vec2::new(300.0, 0.0), TrajectoryMode::AttractorCurve);
        ball.accel = Vec2::new(20.0, 20.0);
        TrajectoryMode::AttractorCurve.delta(&NativeBackend, &mut ball, TICK_RATE);
        assert_eq!(ball.accel, Vec2::new(20.0, 20.0));
    }
}
