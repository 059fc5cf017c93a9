//! View layer: windowing over the document and laying it out on screen.

pub mod render;
pub mod viewport;

pub use viewport::{compute_window, Viewport, Window};
