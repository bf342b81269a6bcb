//! Codabar (NW-7) barcode writer.
//!
//! Content is checked for matching start/stop guards, expanded into a
//! module-level bar/space stream and handed to a [`Renderer`] for
//! rasterization. [`LinearRenderer`] is the default rasterizer and produces a
//! [`BitMatrix`].

pub mod encoding;
pub mod guards;
pub mod image;
mod matrix;
pub mod modules;
mod writer;

pub use encoding::{CharacterCode, ElementWidth, EncodeError};
pub use guards::{GuardKind, GuardPair, Normalized};
pub use crate::image::{BarImageStyle, ImageRenderOptions, render_matrix_image};
pub use matrix::{BitMatrix, LinearRenderer, RenderStyle};
pub use modules::ModuleSequence;
pub use writer::{CodabarWriter, DEFAULT_MARGIN, EncodeHints, Renderer};

/// Encodes `content` with the default [`LinearRenderer`].
pub fn encode(
    content: &str,
    width: i32,
    height: i32,
    hints: &EncodeHints,
) -> Result<BitMatrix, EncodeError> {
    CodabarWriter::new().encode(content, width, height, hints)
}
