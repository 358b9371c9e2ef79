//! Pack-eightway command implementation
//!
//! Splits an eight-direction animation across height-bounded sheets.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{make_eightway_sheets, EightWayOptions, SheetOutput};
use std::path::Path;
use std::process::ExitCode;

use super::reporting;

/// Run the pack-eightway command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    source: &str,
    name: &str,
    out_dir: &str,
    options: &EightWayOptions,
) -> Result<ExitCode> {
    println!(
        "{} {} ({} frames per direction)",
        "Packing:".cyan().bold(),
        name,
        options.frames_per_direction
    );

    let sheets = pack(source, name, out_dir, options)?;
    for sheet in &sheets {
        reporting::print_sheet(sheet);
    }

    println!(
        "\n{} {} sheet(s) written",
        "SUCCESS".green().bold(),
        sheets.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Load and split one animation, returning the written sheets.
pub fn pack(
    source: &str,
    name: &str,
    out_dir: &str,
    options: &EightWayOptions,
) -> Result<Vec<SheetOutput>> {
    let frames = reporting::load_animation(source, name)?;
    make_eightway_sheets(name, &frames, Path::new(out_dir), options)
        .with_context(|| format!("Failed to split animation '{}'", name))
}
