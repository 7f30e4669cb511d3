//! Paddle Duel - a classic two-paddle arcade duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring, opponent)
//! - `platform`: Host input mapping (pointer to paddle target)
//! - `renderer`: Drawing surface abstraction and world painter
//! - `config`: Field and gameplay tuning, loadable from JSON

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{Game, GameEvent, Side, TickInput, World};

/// Game configuration constants
pub mod consts {
    /// Default field dimensions (hosts with a real surface override these)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Opponent paddle travel per tick
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    /// Horizontal serve speed (per tick), also the bound on vertical serve speed
    pub const BALL_SPEED: f32 = 5.0;

    /// Vertical velocity gained per unit of hit offset from paddle center
    pub const DEFLECTION_FACTOR: f32 = 0.15;
    /// Opponent ignores the ball while its center is within this band
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;
}

/// Clamp a paddle's top edge so the paddle stays inside the field
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, field_height: f32) -> f32 {
    y.max(0.0).min(field_height - paddle_height)
}
