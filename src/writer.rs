//! Top-level Codabar writer: guard normalization, module stream, rasterization.

use serde::{Deserialize, Serialize};

use crate::encoding::EncodeError;
use crate::guards::normalize;
use crate::matrix::LinearRenderer;
use crate::modules::ModuleSequence;

/// Blank border used when the caller leaves the margin unset.
pub const DEFAULT_MARGIN: i32 = 10;

/// Turns a module stream into a raster.
///
/// `margin` is the effective blank border already resolved from
/// [`EncodeHints`]; it is never negative.
pub trait Renderer {
    type Output;

    fn render(&self, modules: &[bool], width: i32, height: i32, margin: i32) -> Self::Output;
}

/// Optional writer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeHints {
    /// Blank border in modules; negative means "use the default".
    #[serde(default = "unset_margin")]
    pub margin: i32,
}

fn unset_margin() -> i32 {
    -1
}

impl Default for EncodeHints {
    fn default() -> Self {
        Self {
            margin: unset_margin(),
        }
    }
}

impl EncodeHints {
    pub const fn with_margin(margin: i32) -> Self {
        Self { margin }
    }

    pub fn effective_margin(&self) -> i32 {
        if self.margin < 0 {
            DEFAULT_MARGIN
        } else {
            self.margin
        }
    }
}

/// Codabar writer parameterised over the rasterizer it hands modules to.
#[derive(Debug, Clone, Default)]
pub struct CodabarWriter<R = LinearRenderer> {
    renderer: R,
}

impl CodabarWriter {
    pub fn new() -> Self {
        Self {
            renderer: LinearRenderer,
        }
    }
}

impl<R: Renderer> CodabarWriter<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Validate and expand `content` without rasterizing it.
    pub fn encode_modules(&self, content: &str) -> Result<ModuleSequence, EncodeError> {
        let normalized = normalize(content)?;
        ModuleSequence::build(&normalized)
    }

    /// Encode `content` and rasterize it at the requested size.
    ///
    /// `width` and `height` are forwarded to the renderer untouched. Either
    /// the full raster is returned or an error; never a partial result.
    pub fn encode(
        &self,
        content: &str,
        width: i32,
        height: i32,
        hints: &EncodeHints,
    ) -> Result<R::Output, EncodeError> {
        let modules = self.encode_modules(content)?;
        Ok(self.render(&modules, width, height, hints))
    }

    /// Rasterize an already encoded stream with the margin resolved from `hints`.
    pub fn render(
        &self,
        modules: &ModuleSequence,
        width: i32,
        height: i32,
        hints: &EncodeHints,
    ) -> R::Output {
        self.renderer
            .render(modules, width, height, hints.effective_margin())
    }
}
