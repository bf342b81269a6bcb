//! Encoding command (`codabar encode ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use codabar::guards::normalize;
use codabar::{CodabarWriter, EncodeHints, ModuleSequence, RenderStyle};
use serde::Serialize;

use crate::cli::common::OutputFormatArg;
use crate::cli::utils::{read_content_arg, write_output};

/// Arguments for `codabar encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Content to encode (falls back to `--from` or stdin if omitted).
    pub content: Option<String>,
    /// Read content from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Requested raster width; widened to fit the symbol and margin.
    #[arg(long, default_value_t = 0)]
    pub width: i32,
    /// Requested raster height.
    #[arg(long, default_value_t = 1)]
    pub height: i32,
    /// Blank border in modules (negative for the default of 10).
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub margin: i32,
    /// Output view.
    #[arg(long, default_value_t = OutputFormatArg::Summary, value_enum)]
    pub format: OutputFormatArg,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    content: &'a str,
    normalized: &'a str,
    module_count: usize,
    modules: String,
    width: usize,
    height: usize,
    margin: i32,
}

/// Execute an encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let content = read_content_arg(args.content, args.from)?;
    let hints = EncodeHints::with_margin(args.margin);
    let writer = CodabarWriter::new();

    let normalized = normalize(&content).with_context(|| format!("cannot encode {content:?}"))?;
    let modules =
        ModuleSequence::build(&normalized).with_context(|| format!("cannot encode {content:?}"))?;
    let matrix = writer.render(&modules, args.width, args.height, &hints);

    let mut output = match args.format {
        OutputFormatArg::Summary => format!(
            "{} -> {} modules, {}x{} raster, margin {}",
            normalized,
            modules.len(),
            matrix.width(),
            matrix.height(),
            hints.effective_margin()
        ),
        OutputFormatArg::Modules => modules.to_string(),
        OutputFormatArg::Json => {
            let report = EncodeReport {
                content: &content,
                normalized: &normalized,
                module_count: modules.len(),
                modules: modules.to_string(),
                width: matrix.width(),
                height: matrix.height(),
                margin: hints.effective_margin(),
            };
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        }
        OutputFormatArg::AsciiX => matrix.render(RenderStyle::AsciiX),
        OutputFormatArg::Ascii01 => matrix.render(RenderStyle::Ascii01),
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match args.output {
        Some(path) => {
            write_output(&path, &output)?;
            if path.as_os_str() != "-" {
                println!(
                    "Wrote {}-module symbol for {} to {}",
                    modules.len(),
                    normalized,
                    path.display()
                );
            }
        }
        None => print!("{}", output),
    }
    Ok(())
}
