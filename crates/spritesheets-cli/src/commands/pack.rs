//! Pack command implementation
//!
//! Packs the frames of one animation into a single sheet.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::{make_sheet, SheetOptions, SheetOutput};
use std::path::Path;
use std::process::ExitCode;

use super::reporting;

/// Run the pack command
///
/// # Arguments
/// * `source` - Directory holding one sub-directory per animation
/// * `name` - Animation to pack
/// * `out_dir` - Directory receiving the sheet
/// * `options` - Packing options
///
/// # Returns
/// Exit code: 0 on success
pub fn run(source: &str, name: &str, out_dir: &str, options: &SheetOptions) -> Result<ExitCode> {
    println!("{} {}", "Packing:".cyan().bold(), name);

    let sheet = pack(source, name, out_dir, options)?;
    reporting::print_sheet(&sheet);

    println!(
        "\n{} {} columns per row",
        "SUCCESS".green().bold(),
        sheet.layout.columns
    );
    Ok(ExitCode::SUCCESS)
}

/// Load and pack one animation, returning the written sheet.
pub fn pack(source: &str, name: &str, out_dir: &str, options: &SheetOptions) -> Result<SheetOutput> {
    let frames = reporting::load_animation(source, name)?;
    make_sheet(name, &frames, Path::new(out_dir), options)
        .with_context(|| format!("Failed to pack animation '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spritesheets_backend::{Color, Frame};

    #[test]
    fn test_pack_reports_columns() {
        let dir = tempfile::tempdir().unwrap();
        let anim = dir.path().join("Idle");
        std::fs::create_dir_all(&anim).unwrap();
        for i in 0..5 {
            Frame::new(10, 10, Color::rgb(0.5, 0.5, 0.5))
                .save_png(&anim.join(format!("idle_{}.png", i)))
                .unwrap();
        }

        let source = dir.path().to_str().unwrap();
        let out = dir.path().join("out");
        let options = SheetOptions {
            max_width: 30,
            ..SheetOptions::default()
        };
        let sheet = pack(source, "Idle", out.to_str().unwrap(), &options).unwrap();
        assert_eq!(sheet.layout.columns, 3);
        assert_eq!(sheet.layout.rows, 2);
        assert!(out.join("Idle_sheet.png").exists());
    }

    #[test]
    fn test_missing_animation_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = pack(
            dir.path().to_str().unwrap(),
            "Nope",
            "out",
            &SheetOptions::default(),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Nope"));
    }
}
