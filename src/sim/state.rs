//! Match state and core simulation types
//!
//! [`World`] is the single owner of everything that changes during a match.
//! Readers get shared references; each writer gets a crate-private handle to
//! exactly the fields it owns:
//! - input adapter: human paddle `y`
//! - opponent controller: opponent paddle `y`
//! - physics step: ball, score, events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Wall;
use super::geometry::Rect;
use super::serve::ServeRng;
use crate::config::{ConfigError, GameConfig};

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Follows the pointer
    Human,
    /// Tracks the ball on its own
    Opponent,
}

/// A paddle: a fixed-size rectangle that only moves vertically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
    pub rect: Rect,
}

impl Paddle {
    /// Paddle vertically centered in its lane
    pub fn new(side: Side, controller: Controller, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_margin,
            Side::Right => config.field_width - config.paddle_margin - config.paddle_width,
        };
        let y = config.field_height / 2.0 - config.paddle_height / 2.0;
        Self {
            side,
            controller,
            rect: Rect::new(x, y, config.paddle_width, config.paddle_height),
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect.center_y()
    }
}

/// The ball's bounding square and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball centered in the field with a fresh random serve
    pub fn served<R: ServeRng + ?Sized>(field: Vec2, size: f32, speed: f32, rng: &mut R) -> Self {
        let dir = if rng.serve_right() { 1.0 } else { -1.0 };
        let vel = Vec2::new(speed * dir, speed * rng.serve_spread());
        Self {
            pos: Self::centered_pos(field, size),
            vel,
            size,
        }
    }

    /// Top-left position that centers a ball of `size` in the field
    #[inline]
    pub fn centered_pos(field: Vec2, size: f32) -> Vec2 {
        field / 2.0 - Vec2::splat(size / 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Add one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off this wall
    WallBounce(Wall),
    /// Ball returned by the paddle on this side
    PaddleHit(Side),
    /// This side won a point and the ball was re-served
    Scored(Side),
}

/// Complete state of one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    config: GameConfig,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    score: Score,
    /// Simulation tick counter
    ticks: u64,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl World {
    /// Start a match: paddles centered, ball centered with a random serve
    ///
    /// The human plays the left paddle, the opponent controller the right.
    /// Fails if `config` does not describe a playable field.
    pub fn new<R: ServeRng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let left = Paddle::new(Side::Left, Controller::Human, &config);
        let right = Paddle::new(Side::Right, Controller::Opponent, &config);
        let ball = Ball::served(
            Self::field_of(&config),
            config.ball_size,
            config.ball_speed,
            rng,
        );
        Ok(Self {
            config,
            left,
            right,
            ball,
            score: Score::default(),
            ticks: 0,
            events: Vec::new(),
        })
    }

    fn field_of(config: &GameConfig) -> Vec2 {
        Vec2::new(config.field_width, config.field_height)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Field dimensions (width, height)
    pub fn field(&self) -> Vec2 {
        Self::field_of(&self.config)
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.left
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.right
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Top edge of the human paddle (input adapter's only write)
    pub(crate) fn human_paddle_y_mut(&mut self) -> &mut f32 {
        &mut self.left.rect.y
    }

    /// Top edge of the opponent paddle (opponent controller's only write)
    pub(crate) fn opponent_paddle_y_mut(&mut self) -> &mut f32 {
        &mut self.right.rect.y
    }

    /// Everything the physics step owns, plus read access to both paddles
    pub(crate) fn physics_view(&mut self) -> PhysicsView<'_> {
        PhysicsView {
            field: Self::field_of(&self.config),
            config: &self.config,
            left: &self.left.rect,
            right: &self.right.rect,
            ball: &mut self.ball,
            score: &mut self.score,
            events: &mut self.events,
        }
    }

    /// Open a new tick: bump the counter and drop last tick's events
    pub(crate) fn begin_tick(&mut self) {
        self.ticks += 1;
        self.events.clear();
    }

    #[cfg(test)]
    pub(crate) fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    #[cfg(test)]
    pub(crate) fn set_paddle_y(&mut self, side: Side, y: f32) {
        match side {
            Side::Left => self.left.rect.y = y,
            Side::Right => self.right.rect.y = y,
        }
    }
}

/// Borrow split handed to the physics step
pub(crate) struct PhysicsView<'a> {
    pub field: Vec2,
    pub config: &'a GameConfig,
    pub left: &'a Rect,
    pub right: &'a Rect,
    pub ball: &'a mut Ball,
    pub score: &'a mut Score,
    pub events: &'a mut Vec<GameEvent>,
}
