//! Match configuration and state
//!
//! Everything the match loop owns lives here: the field, the ball, both
//! paddles, the scoreboard and the RNG used for serve directions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::backend::BackendKind;
use super::ball::Ball;
use super::paddle::{Controller, Paddle};
use super::trajectory::TrajectoryMode;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, NAME_MAX_CHARS};
use crate::ui::BoundedText;

/// Number of humans at the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerCount {
    /// Right paddle is AI-controlled
    #[default]
    One,
    Two,
}

/// Serve speed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Serve speed per axis (px/s)
    pub fn base_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 300.0,
            Difficulty::Medium => 350.0,
            Difficulty::Hard => 400.0,
        }
    }

    /// Acceleration per axis (px/s²)
    pub fn base_accel(&self) -> f32 {
        match self {
            Difficulty::Easy => 20.0,
            Difficulty::Medium => 30.0,
            Difficulty::Hard => 40.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Pre-match selection, fixed for the whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMode {
    pub players: PlayerCount,
    pub path: TrajectoryMode,
    pub difficulty: Difficulty,
    pub backend: BackendKind,
}

/// Which half of the field (and which paddle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Playing area, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A named score holder
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: BoundedText,
    score: u32,
}

impl Player {
    /// Names longer than the cap are truncated
    pub fn new(name: &str) -> Self {
        Self {
            name: BoundedText::from_str_truncated(name, NAME_MAX_CHARS),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

/// Both players of a match
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub left: Player,
    pub right: Player,
}

impl Scoreboard {
    pub fn new(left: Player, right: Player) -> Self {
        Self { left, right }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Give `side` one point, returning its new score
    pub fn award(&mut self, side: Side) -> u32 {
        let player = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        player.award_point();
        player.score()
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    pub mode: GameMode,
    pub field: Field,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub scoreboard: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    /// Set up a match: ball served from the center, paddles centred
    pub fn new(mode: GameMode, left_name: &str, right_name: &str, seed: u64) -> Self {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(field, mode.path, mode.difficulty, &mut rng);
        let right_controller = match mode.players {
            PlayerCount::One => Controller::Ai,
            PlayerCount::Two => Controller::Human,
        };

        Self {
            mode,
            field,
            ball,
            left: Paddle::new(Side::Left, Controller::Human, field),
            right: Paddle::new(Side::Right, right_controller, field),
            scoreboard: Scoreboard::new(Player::new(left_name), Player::new(right_name)),
            time_ticks: 0,
            rng,
        }
    }
}
