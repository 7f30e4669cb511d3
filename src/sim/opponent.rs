//! Opponent paddle controller
//!
//! Bang-bang tracking with a dead zone: each tick the paddle either steps a
//! fixed distance toward the ball's center or holds still. It never closes
//! the gap faster than one step per tick, which keeps it beatable.

use super::state::World;
use crate::clamp_paddle_y;

/// Which way the opponent moves this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Down,
    Hold,
}

/// Decide a move from the paddle center and the ball center (both `y`)
///
/// Screen coordinates: "down" means increasing `y`.
pub fn steer(paddle_center_y: f32, ball_center_y: f32, dead_zone: f32) -> Steer {
    if paddle_center_y < ball_center_y - dead_zone {
        Steer::Down
    } else if paddle_center_y > ball_center_y + dead_zone {
        Steer::Up
    } else {
        Steer::Hold
    }
}

/// Move the opponent paddle one step toward the ball, then clamp it to the field
pub fn track_ball(world: &mut World) {
    let config = world.config();
    let (speed, dead_zone) = (config.paddle_speed, config.opponent_dead_zone);
    let field_height = config.field_height;

    let paddle = world.right_paddle();
    let height = paddle.rect.height;
    let delta = match steer(paddle.center_y(), world.ball().center().y, dead_zone) {
        Steer::Down => speed,
        Steer::Up => -speed,
        Steer::Hold => 0.0,
    };

    let y = world.opponent_paddle_y_mut();
    *y = clamp_paddle_y(*y + delta, height, field_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;
    use crate::sim::serve::FixedServe;
    use crate::sim::state::{Ball, Side};
    use glam::Vec2;

    fn world_with_ball_center(center_y: f32) -> World {
        let mut world = World::new(GameConfig::default(), &mut FixedServe::new(true, 0.0)).unwrap();
        let pos = Vec2::new(400.0, center_y - BALL_SIZE / 2.0);
        world.set_ball(Ball::new(pos, Vec2::new(5.0, 0.0), BALL_SIZE));
        world
    }

    #[test]
    fn test_steer_dead_zone() {
        assert_eq!(steer(300.0, 300.0, 10.0), Steer::Hold);
        assert_eq!(steer(300.0, 310.0, 10.0), Steer::Hold);
        assert_eq!(steer(300.0, 290.0, 10.0), Steer::Hold);
        assert_eq!(steer(300.0, 310.5, 10.0), Steer::Down);
        assert_eq!(steer(300.0, 289.5, 10.0), Steer::Up);
    }

    #[test]
    fn test_moves_down_by_one_step() {
        // Paddle center 300, ball center 400
        let mut world = world_with_ball_center(400.0);
        let before = world.right_paddle().y();
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), before + PADDLE_SPEED);
    }

    #[test]
    fn test_moves_up_by_one_step() {
        let mut world = world_with_ball_center(100.0);
        let before = world.right_paddle().y();
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), before - PADDLE_SPEED);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let mut world = world_with_ball_center(305.0);
        let before = world.right_paddle().y();
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), before);
    }

    #[test]
    fn test_clamps_at_bottom() {
        let mut world = world_with_ball_center(599.0);
        world.set_paddle_y(Side::Right, FIELD_HEIGHT - PADDLE_HEIGHT - 2.0);
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), FIELD_HEIGHT - PADDLE_HEIGHT);
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), FIELD_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_clamps_at_top() {
        let mut world = world_with_ball_center(1.0);
        world.set_paddle_y(Side::Right, 3.0);
        track_ball(&mut world);
        assert_eq!(world.right_paddle().y(), 0.0);
    }

    #[test]
    fn test_never_touches_human_paddle() {
        let mut world = world_with_ball_center(550.0);
        let human = world.left_paddle().rect;
        for _ in 0..100 {
            track_ball(&mut world);
        }
        assert_eq!(world.left_paddle().rect, human);
    }
}
