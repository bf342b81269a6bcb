//! Shared clap helper types for CLI commands.

use clap::ValueEnum;

/// Output views for `codabar encode`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// One-line summary.
    Summary,
    /// Rendered raster using `X` for bars.
    #[value(name = "ascii-x")]
    AsciiX,
    /// Rendered raster using `1`/`0`.
    #[value(name = "ascii-01")]
    Ascii01,
    /// Raw module stream, one digit per module.
    Modules,
    /// JSON report.
    Json,
}

