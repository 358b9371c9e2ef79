//! Validate command implementation
//!
//! Checks a batch manifest without reading any frames.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_spec::{validate_manifest, Manifest};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, JsonWarning, ValidateOutput};
use super::reporting;

/// Run the validate command
///
/// # Arguments
/// * `manifest_path` - Path to the manifest JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(manifest_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(manifest_path)
    } else {
        run_human(manifest_path)
    }
}

fn run_human(manifest_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), manifest_path);

    let manifest = Manifest::from_file(Path::new(manifest_path))
        .with_context(|| format!("Failed to load manifest: {}", manifest_path))?;
    let result = validate_manifest(&manifest);
    reporting::print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Manifest is valid ({} animations)",
            "SUCCESS".green().bold(),
            manifest.animations.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Manifest has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(manifest_path: &str) -> Result<ExitCode> {
    let output = match Manifest::from_file(Path::new(manifest_path)) {
        Ok(manifest) => {
            let result = validate_manifest(&manifest);
            ValidateOutput {
                success: result.is_ok(),
                errors: result.errors.iter().map(JsonError::from).collect(),
                warnings: result.warnings.iter().map(JsonWarning::from).collect(),
                animations: Some(manifest.animations.len()),
            }
        }
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![JsonError::new(
                error_codes::MANIFEST_LOAD,
                format!("Failed to load manifest {}: {}", manifest_path, e),
            )],
            warnings: Vec::new(),
            animations: None,
        },
    };

    reporting::print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
