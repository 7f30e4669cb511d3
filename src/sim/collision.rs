//! Collision detection and response for the ball
//!
//! An arcade approximation: walls reflect one velocity component, paddles
//! replace the vertical component with a linear function of where the ball
//! struck. Everything is axis-aligned.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Ball, Side};

/// Which wall the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Reflect the ball off the top and bottom walls of a field `field_height` tall
///
/// The ball is clamped back inside and its vertical velocity negated.
/// Returns the wall that was hit. A ball smaller than the field can strike
/// at most one wall per call.
pub fn resolve_walls(ball: &mut Ball, field_height: f32) -> Option<Wall> {
    if ball.top() < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        return Some(Wall::Top);
    }
    if ball.bottom() > field_height {
        ball.pos.y = field_height - ball.size;
        ball.vel.y = -ball.vel.y;
        return Some(Wall::Bottom);
    }
    None
}

/// Vertical velocity after striking a paddle
///
/// Linear in the offset between ball center and paddle center: a center hit
/// leaves the ball flat, edge hits send it off steeply.
#[inline]
pub fn deflection(ball: &Ball, paddle: &Rect, factor: f32) -> f32 {
    (ball.center().y - paddle.center_y()) * factor
}

/// Whether the ball is in contact with the paddle guarding `side`
///
/// Only the paddle's inner face is tested on the horizontal axis: a ball that
/// slipped behind the paddle but still overlaps it vertically counts as a hit.
pub fn touches_paddle(ball: &Ball, paddle: &Rect, side: Side) -> bool {
    let crossed_face = match side {
        Side::Left => ball.left() < paddle.right(),
        Side::Right => ball.right() > paddle.left(),
    };
    crossed_face && paddle.overlaps_vertically(ball.top(), ball.bottom())
}

/// Bounce the ball off the paddle guarding `side`, if touching
///
/// The ball is moved flush against the paddle's inner face, its horizontal
/// velocity negated and its vertical velocity replaced by [`deflection`].
/// Travel direction is not checked, so a ball still overlapping after a
/// bounce is bounced again. Returns true on contact.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Rect, side: Side, factor: f32) -> bool {
    if !touches_paddle(ball, paddle, side) {
        return false;
    }

    ball.pos.x = match side {
        Side::Left => paddle.right(),
        Side::Right => paddle.left() - ball.size,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = deflection(ball, paddle, factor);
    true
}

/// Side that wins the point if the ball has left the field horizontally
///
/// Leaving past the left edge scores for the right, and vice versa.
pub fn scoring_side(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.left() < 0.0 {
        Some(Side::Right)
    } else if ball.right() > field_width {
        Some(Side::Left)
    } else {
        None
    }
}
