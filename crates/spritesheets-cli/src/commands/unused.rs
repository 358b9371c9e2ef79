//! Unused command implementation
//!
//! Lists frames an animation never plays and optionally moves them aside.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{unused::move_frames, unused_frames};
use std::path::Path;
use std::process::ExitCode;

use super::reporting;

/// Run the unused command
///
/// # Arguments
/// * `source` - Directory holding one sub-directory per animation
/// * `name` - Animation to inspect
/// * `used` - Number of evenly spaced frames the animation plays
/// * `move_to` - Directory to move the unused frames into
pub fn run(source: &str, name: &str, used: usize, move_to: Option<&str>) -> Result<ExitCode> {
    let frames = reporting::load_animation(source, name)?;
    let unused = unused_frames(&frames, used);

    println!(
        "{} {} ({} of {} frames unused)",
        "Unused:".cyan().bold(),
        name,
        unused.len(),
        frames.len()
    );
    for path in &unused {
        println!("  {} {}", "-".dimmed(), path.display());
    }

    if let Some(dest) = move_to {
        if !unused.is_empty() {
            let moved = move_frames(&unused, Path::new(dest))
                .with_context(|| format!("Failed to move unused frames to {}", dest))?;
            println!(
                "\n{} moved {} frame(s) to {}",
                "SUCCESS".green().bold(),
                moved.len(),
                dest
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
