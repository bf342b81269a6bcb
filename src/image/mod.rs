//! Conversion of rendered symbols into in-memory images.

mod paint;

pub use paint::{BarImageStyle, ImageRenderOptions, render_matrix_image};
