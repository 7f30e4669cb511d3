//! Rendering module
//!
//! The simulation never draws. Hosts implement [`Surface`] over whatever
//! they can paint on, and [`draw_world`] paints one frame from a read-only
//! [`World`].

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use ascii::AsciiSurface;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::{Rect, Side, World};

/// RGBA, each channel in `0.0..=1.0`
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PADDLE_LEFT: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PADDLE_RIGHT: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BALL: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CENTER_LINE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Center line dash pattern (dash, gap)
pub const CENTER_DASH: (f32, f32) = (10.0, 15.0);
/// Score text size in pixels
pub const SCORE_FONT_PX: f32 = 36.0;
/// Score text baseline, measured from the top of the field
pub const SCORE_BASELINE_Y: f32 = 50.0;

/// A 2D drawing surface in field coordinates (origin top-left, `y` down)
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Vertical dashed line at `x` from `top` to `bottom`
    fn dashed_vline(&mut self, x: f32, top: f32, bottom: f32, dash: (f32, f32), color: Color);
    /// Text with its baseline-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color);
}

pub fn paddle_color(side: Side) -> Color {
    match side {
        Side::Left => colors::PADDLE_LEFT,
        Side::Right => colors::PADDLE_RIGHT,
    }
}

/// Convert a color into a CSS `rgba()` string
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Paint one frame of `world`
///
/// Draw order: clear, center line, paddles, ball, scores.
pub fn draw_world<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let field = world.field();

    surface.clear();
    surface.dashed_vline(field.x / 2.0, 0.0, field.y, CENTER_DASH, colors::CENTER_LINE);

    for paddle in [world.left_paddle(), world.right_paddle()] {
        surface.fill_rect(paddle.rect, paddle_color(paddle.side));
    }

    let ball = world.ball();
    surface.fill_circle(ball.center(), ball.size / 2.0, colors::BALL);

    let score = world.score();
    for side in [Side::Left, Side::Right] {
        // Each score sits over the middle of its own half
        let x = match side {
            Side::Left => field.x / 4.0,
            Side::Right => field.x * 3.0 / 4.0,
        };
        surface.draw_text(
            &score.get(side).to_string(),
            Vec2::new(x, SCORE_BASELINE_Y),
            SCORE_FONT_PX,
            colors::SCORE_TEXT,
        );
    }
}
