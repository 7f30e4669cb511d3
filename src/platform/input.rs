//! Pointer input for the human paddle
//!
//! The paddle snaps to the pointer every update: no smoothing, no velocity.

use crate::clamp_paddle_y;
use crate::sim::World;

/// Top edge that centers a paddle on `pointer_y`, clamped into the field
pub fn paddle_target_y(pointer_y: f32, paddle_height: f32, field_height: f32) -> f32 {
    clamp_paddle_y(pointer_y - paddle_height / 2.0, paddle_height, field_height)
}

/// Move the human paddle under the pointer
///
/// Non-finite coordinates are ignored and the paddle holds its position.
pub fn apply_pointer(world: &mut World, pointer_y: f32) {
    if !pointer_y.is_finite() {
        log::warn!("Ignoring non-finite pointer y: {}", pointer_y);
        return;
    }

    let height = world.left_paddle().rect.height;
    let field_height = world.config().field_height;
    *world.human_paddle_y_mut() = paddle_target_y(pointer_y, height, field_height);
}

/// Convert a client-space pointer `y` into surface coordinates
///
/// `surface_top` and `css_height` come from the surface's bounding box;
/// `pixel_height` is its backing size. A surface stretched by CSS is
/// scaled back into its own pixel space.
pub fn client_to_surface_y(client_y: f32, surface_top: f32, css_height: f32, pixel_height: f32) -> f32 {
    let local = client_y - surface_top;
    if css_height > 0.0 {
        local * pixel_height / css_height
    } else {
        local
    }
}
