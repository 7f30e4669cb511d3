//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick displacement only
//! - Injected serve randomness only
//! - No rendering dependencies; pointer input arrives through `TickInput`

pub mod collision;
pub mod geometry;
pub mod opponent;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{Wall, deflection, resolve_paddle, resolve_walls, scoring_side};
pub use geometry::Rect;
pub use opponent::{Steer, steer, track_ball};
pub use serve::{FixedServe, SeededServe, ServeRng};
pub use state::{Ball, Controller, GameEvent, Paddle, Score, Side, World};
pub use tick::{Game, TickInput, physics_step, tick};
