//! Platform abstraction layer
//!
//! Maps host events into simulation input. Hosts own event capture; this
//! module only converts coordinates and writes the human paddle.

pub mod input;

pub use input::{apply_pointer, client_to_surface_y, paddle_target_y};
