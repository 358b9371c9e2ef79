//! Bounds command implementation
//!
//! Reports where the visible content of an animation lies and the smallest
//! centered crop window that keeps all of it.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{find_animation_bounds, get_all_boxes, Frame};
use std::process::ExitCode;

use super::json_output::BoundsOutput;
use super::reporting;

/// Run the bounds command
///
/// # Arguments
/// * `source` - Directory holding one sub-directory per animation
/// * `name` - Animation to inspect
/// * `cutoff` - Alpha at or above which a pixel is content
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(source: &str, name: &str, cutoff: f64, json_output: bool) -> Result<ExitCode> {
    let report = measure(source, name, cutoff)?;

    if json_output {
        reporting::print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Bounds:".cyan().bold(), name);
    println!(
        "  {} {} frames of {}x{}",
        "Frames:".dimmed(),
        report.frames,
        report.frame_width,
        report.frame_height
    );
    println!(
        "  {} rows {}..{}, columns {}..{}",
        "Content:".dimmed(),
        report.bounds[0],
        report.bounds[1],
        report.bounds[2],
        report.bounds[3]
    );
    println!(
        "\n{} --window {}x{}",
        "Suggested:".green().bold(),
        report.window[0],
        report.window[1]
    );
    Ok(ExitCode::SUCCESS)
}

/// Bound every frame of an animation and derive a covering window.
pub fn measure(source: &str, name: &str, cutoff: f64) -> Result<BoundsOutput> {
    let frames = reporting::load_animation(source, name)?;
    let boxes = get_all_boxes(&frames, cutoff)
        .with_context(|| format!("Failed to bound frames of '{}'", name))?;
    let bounds = find_animation_bounds(&boxes.boxes)
        .with_context(|| format!("Animation '{}' has no frames", name))?;

    let (width, height) = Frame::load(frames.first())?.dimensions();
    let window = bounds.centered_window(width, height);

    Ok(BoundsOutput::new(
        name,
        frames.len(),
        (width, height),
        &bounds,
        window,
    ))
}
