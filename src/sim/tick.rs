//! Fixed-step simulation tick
//!
//! One tick = apply pending pointer input, run the physics step, run the
//! opponent controller. Displacements are per tick, not per second: the
//! simulation runs exactly as fast as the host calls [`tick`].

use super::collision::{resolve_paddle, resolve_walls, scoring_side};
use super::opponent;
use super::serve::{SeededServe, ServeRng};
use super::state::{Ball, GameEvent, Side, World};
use crate::config::{ConfigError, GameConfig};
use crate::platform::apply_pointer;

/// Input gathered by the host since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer `y` in field coordinates (None = pointer did not move)
    pub pointer_y: Option<f32>,
}

impl TickInput {
    pub fn pointer(y: f32) -> Self {
        Self { pointer_y: Some(y) }
    }
}

/// Advance ball, walls, paddles and score by one tick
///
/// Order is fixed: integrate, walls, left paddle, right paddle, scoring.
/// At most one point is scored per call. Paddle positions are read, never
/// written.
pub fn physics_step<R: ServeRng + ?Sized>(world: &mut World, rng: &mut R) {
    let view = world.physics_view();
    let factor = view.config.deflection_factor;
    let ball = view.ball;

    // Explicit Euler, fixed displacement per tick
    ball.pos += ball.vel;

    if let Some(wall) = resolve_walls(ball, view.field.y) {
        view.events.push(GameEvent::WallBounce(wall));
    }

    for (side, paddle) in [(Side::Left, view.left), (Side::Right, view.right)] {
        if resolve_paddle(ball, paddle, side, factor) {
            log::debug!(
                "{} paddle hit, ball vel ({:.2}, {:.2})",
                side.as_str(),
                ball.vel.x,
                ball.vel.y
            );
            view.events.push(GameEvent::PaddleHit(side));
        }
    }

    if let Some(side) = scoring_side(ball, view.field.x) {
        view.score.award(side);
        *ball = Ball::served(view.field, ball.size, view.config.ball_speed, rng);
        log::info!(
            "Point to {} ({} - {}), serving at ({:.2}, {:.2})",
            side.as_str(),
            view.score.left,
            view.score.right,
            ball.vel.x,
            ball.vel.y
        );
        view.events.push(GameEvent::Scored(side));
    }
}

/// Advance the whole match by one tick
pub fn tick<R: ServeRng + ?Sized>(world: &mut World, input: &TickInput, rng: &mut R) {
    world.begin_tick();

    if let Some(y) = input.pointer_y {
        apply_pointer(world, y);
    }

    physics_step(world, rng);
    opponent::track_ball(world);
}

/// A match plus the serve randomness that drives it
///
/// This is what hosts hold: call [`Game::tick`] once per frame, then hand
/// [`Game::world`] to a renderer.
#[derive(Debug, Clone)]
pub struct Game<R: ServeRng = SeededServe> {
    world: World,
    rng: R,
}

impl Game<SeededServe> {
    /// New match with a seeded serve source
    ///
    /// Uses `config.seed` when present, otherwise `fallback_seed`.
    pub fn new(config: GameConfig, fallback_seed: u64) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or(fallback_seed);
        log::info!("New match, seed {}", seed);
        Self::with_rng(config, SeededServe::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: ServeRng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let world = World::new(config, &mut rng)?;
        Ok(Self { world, rng })
    }

    /// Run one tick; returns what happened during it
    pub fn tick(&mut self, input: &TickInput) -> &[GameEvent] {
        tick(&mut self.world, input, &mut self.rng);
        self.world.events()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
