//! Fixed timestep match tick
//!
//! One call advances the match by exactly one frame: ball, paddles, then
//! paddle bounces. Rendering happens afterwards in the caller.

use super::backend::TrajectoryBackend;
use super::ball::BallEvent;
use super::paddle::PaddleInput;
use super::state::{MatchState, Side};
use crate::bench::BenchmarkContext;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// W/S
    pub left: PaddleInput,
    /// Up/Down; ignored while the right paddle is AI-controlled
    pub right: PaddleInput,
}

/// Events emitted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `side` got a point and now has `score`
    Scored { side: Side, score: u32 },
    PaddleHit(Side),
    /// Ball got stuck in a corner and was re-served
    Cornered,
}

/// Advance the match by one tick
pub fn tick(
    state: &mut MatchState,
    input: &TickInput,
    backend: &dyn TrajectoryBackend,
    bench: &mut BenchmarkContext,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    match state
        .ball
        .update(backend, bench, &mut state.rng, Some(&mut state.scoreboard))
    {
        Some(BallEvent::Scored(side)) => {
            let scorer = state.scoreboard.player(side);
            log::info!(
                "{} scores past {} ({} - {})",
                scorer.name(),
                state.scoreboard.player(side.opponent()).name(),
                state.scoreboard.left.score(),
                state.scoreboard.right.score()
            );
            events.push(GameEvent::Scored {
                side,
                score: scorer.score(),
            });
        }
        Some(BallEvent::Cornered) => {
            log::debug!("Ball cornered at tick {}, re-served", state.time_ticks);
            events.push(GameEvent::Cornered);
        }
        None => {}
    }

    let ball_pos = state.ball.pos;
    state.left.update(input.left, ball_pos);
    state.right.update(input.right, ball_pos);

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        if state.ball.collide_with_paddle(paddle) {
            log::debug!("{:?} paddle hit, vx now {:.1}", side, state.ball.vel.x);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    events
}
