use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{FrameSequence, SheetOutput};
use spritesheets_spec::ValidationResult;
use std::path::Path;

/// Load the frames of `<source>/<name>`.
pub(crate) fn load_animation(source: &str, name: &str) -> Result<FrameSequence> {
    let dir = Path::new(source).join(name);
    FrameSequence::from_dir(&dir)
        .with_context(|| format!("Failed to read frames of '{}' from {}", name, dir.display()))
}

/// One summary line for a written sheet.
pub(crate) fn print_sheet(sheet: &SheetOutput) {
    println!(
        "  {} {} ({} frames, {} columns x {} rows, {}x{})",
        "+".green(),
        sheet.path.display(),
        sheet.layout.frame_count,
        sheet.layout.columns,
        sheet.layout.rows,
        sheet.layout.width(),
        sheet.layout.height(),
    );
}

pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
