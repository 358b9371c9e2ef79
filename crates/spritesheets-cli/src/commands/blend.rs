//! Blend command implementation
//!
//! Cross-fades one animation into another and writes the blended frames.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{blend_animations, BlendOptions};
use std::path::Path;
use std::process::ExitCode;

use super::reporting;

/// Run the blend command
///
/// # Arguments
/// * `source` - Directory holding one sub-directory per animation
/// * `first` - Animation faded out; also names the output
/// * `second` - Animation faded in
/// * `out_root` - Root receiving `<first>_blended/`
/// * `start` - Last frame that is purely `first`
/// * `crossover` - First frame that is purely `second`
/// * `length` - Cycle length, 0 for none
pub fn run(
    source: &str,
    first: &str,
    second: &str,
    out_root: &str,
    start: usize,
    crossover: usize,
    length: usize,
) -> Result<ExitCode> {
    println!(
        "{} {} -> {} (frames {}..{})",
        "Blending:".cyan().bold(),
        first,
        second,
        start,
        crossover
    );

    let first_frames = reporting::load_animation(source, first)?;
    let second_frames = reporting::load_animation(source, second)?;

    let options = BlendOptions {
        animation_length: length,
        ..BlendOptions::new(first, start, crossover)
    };
    let written = blend_animations(&first_frames, &second_frames, Path::new(out_root), &options)
        .with_context(|| format!("Failed to blend '{}' into '{}'", first, second))?;

    println!(
        "\n{} {} frames written to {}",
        "SUCCESS".green().bold(),
        written.len(),
        options.output_dir(Path::new(out_root)).display()
    );
    Ok(ExitCode::SUCCESS)
}
