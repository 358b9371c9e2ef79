//! Batch command implementation
//!
//! Validates a manifest, packs every animation it lists (eight-way entries
//! through the multi-sheet splitter) and writes the animation descriptor.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesheets_backend::sheet::cell_size;
use spritesheets_backend::{
    descriptor, make_eightway_sheets, make_sheet, EightWayOptions, EightWayPlan, FrameSequence,
    SheetLayout, SheetOptions, SheetOutput,
};
use spritesheets_spec::{validate_manifest, AnimationEntry, Manifest};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;

use super::json_output::{error_codes, BatchOutput, JsonError, JsonWarning, SheetRecord};
use super::reporting;

/// Everything a batch run wrote.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Sheets in manifest order.
    pub sheets: Vec<SheetRecord>,
    /// Descriptor path, when the manifest names one.
    pub descriptor: Option<PathBuf>,
}

/// Run the batch command
///
/// # Arguments
/// * `manifest_path` - Path to the manifest JSON file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if validation or packing failed
pub fn run(manifest_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(manifest_path)
    } else {
        run_human(manifest_path)
    }
}

fn run_human(manifest_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Batch:".cyan().bold(), manifest_path);

    let manifest = Manifest::from_file(Path::new(manifest_path))
        .with_context(|| format!("Failed to load manifest: {}", manifest_path))?;

    let validation = validate_manifest(&manifest);
    reporting::print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Manifest has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    println!("{} {}", "Source:".dimmed(), manifest.source_root.display());
    println!("{} {}", "Output:".dimmed(), manifest.output_root.display());

    let planned = plan_manifest(&manifest)?;

    let mut sheet_count = 0;
    for animation in &planned {
        println!("\n{} {}", "Packing:".cyan().bold(), animation.entry.name);
        let sheets = pack_planned(&manifest, animation)?;
        for sheet in &sheets {
            reporting::print_sheet(sheet);
        }
        sheet_count += sheets.len();
    }

    if let Some(path) = write_descriptor(&manifest)? {
        println!("\n{} {}", "Descriptor:".dimmed(), path.display());
    }

    println!(
        "\n{} {} animation(s), {} sheet(s) ({:.2}s)",
        "SUCCESS".green().bold(),
        manifest.animations.len(),
        sheet_count,
        start.elapsed().as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(manifest_path: &str) -> Result<ExitCode> {
    let manifest = match Manifest::from_file(Path::new(manifest_path)) {
        Ok(manifest) => manifest,
        Err(e) => {
            let error = JsonError::new(
                error_codes::MANIFEST_LOAD,
                format!("Failed to load manifest {}: {}", manifest_path, e),
            );
            reporting::print_json(&BatchOutput::failure(vec![error], Vec::new()))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_manifest(&manifest);
    let warnings: Vec<JsonWarning> = validation.warnings.iter().map(JsonWarning::from).collect();
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(JsonError::from).collect();
        reporting::print_json(&BatchOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(1));
    }

    let output = json_report(&manifest, warnings);
    reporting::print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Pack a validated manifest into a JSON report.
///
/// Sheet failures are reported as `CLI_002`, descriptor failures as `CLI_003`
/// alongside the sheets that were written.
fn json_report(manifest: &Manifest, warnings: Vec<JsonWarning>) -> BatchOutput {
    let sheets = match pack_sheets(manifest) {
        Ok(sheets) => sheets,
        Err(e) => {
            let error = JsonError::new(error_codes::PACK_ERROR, format!("{:#}", e));
            return BatchOutput::failure(vec![error], warnings);
        }
    };

    match write_descriptor(manifest) {
        Ok(descriptor) => BatchOutput {
            success: true,
            errors: Vec::new(),
            warnings,
            sheets,
            descriptor: descriptor.map(|p| p.display().to_string()),
        },
        Err(e) => BatchOutput {
            success: false,
            errors: vec![JsonError::new(error_codes::DESCRIPTOR_ERROR, format!("{:#}", e))],
            warnings,
            sheets,
            descriptor: None,
        },
    }
}

/// Pack every animation of an already validated manifest and write its descriptor.
///
/// Every animation is loaded and laid out before the first sheet is written,
/// so a configuration error leaves the output directory untouched.
pub fn pack_manifest(manifest: &Manifest) -> Result<BatchReport> {
    let sheets = pack_sheets(manifest)?;
    let descriptor = write_descriptor(manifest)?;
    Ok(BatchReport { sheets, descriptor })
}

fn pack_sheets(manifest: &Manifest) -> Result<Vec<SheetRecord>> {
    let planned = plan_manifest(manifest)?;
    let mut records = Vec::new();
    for animation in &planned {
        let sheets = pack_planned(manifest, animation)?;
        records.extend(
            sheets
                .iter()
                .map(|sheet| SheetRecord::new(&animation.entry.name, sheet)),
        );
    }
    Ok(records)
}

/// An animation whose frames and sheet geometry were checked before any output.
#[derive(Debug, Clone)]
pub struct PlannedAnimation<'a> {
    pub entry: &'a AnimationEntry,
    /// Frames found on disk, before subset and stride.
    pub frames: FrameSequence,
    /// Frames that will be packed, after subset and stride.
    pub packed: usize,
}

impl PlannedAnimation<'_> {
    /// True when the packed frame count is what the manifest declares.
    pub fn matches_manifest(&self) -> bool {
        self.packed == self.entry.total_frames()
    }
}

/// Load every animation of a manifest and lay out its sheets without writing.
pub fn plan_manifest(manifest: &Manifest) -> Result<Vec<PlannedAnimation<'_>>> {
    manifest
        .animations
        .iter()
        .map(|entry| plan_animation(manifest, entry))
        .collect()
}

/// Load one entry's frames and check that they fit the manifest's sheet bounds.
pub fn plan_animation<'a>(
    manifest: &Manifest,
    entry: &'a AnimationEntry,
) -> Result<PlannedAnimation<'a>> {
    let dir = manifest.animation_dir(entry);
    let frames = FrameSequence::from_dir(&dir).with_context(|| {
        format!(
            "Failed to read frames of '{}' from {}",
            entry.name,
            dir.display()
        )
    })?;

    let options = sheet_options(manifest, entry);
    let selected = options
        .resolve(&frames)
        .with_context(|| format!("Failed to select frames of '{}'", entry.name))?;
    let (cell_width, cell_height) = cell_size(&selected, options.window)
        .with_context(|| format!("Failed to read frames of '{}'", entry.name))?;

    if entry.eight_way {
        EightWayPlan::compute(
            selected.len(),
            cell_width,
            cell_height,
            manifest.max_width,
            manifest.max_height,
            manifest.frames_per_direction_for(entry),
        )
        .with_context(|| format!("Failed to split animation '{}'", entry.name))?;
    } else {
        SheetLayout::compute(selected.len(), cell_width, cell_height, manifest.max_width)
            .with_context(|| format!("Failed to pack animation '{}'", entry.name))?;
    }

    let planned = PlannedAnimation {
        entry,
        frames,
        packed: selected.len(),
    };
    if !planned.matches_manifest() {
        warn!(
            animation = %entry.name,
            found = planned.packed,
            declared = entry.total_frames(),
            "frame count differs from manifest"
        );
    }
    Ok(planned)
}

/// Pack one planned animation into `output_root`.
pub fn pack_planned(
    manifest: &Manifest,
    animation: &PlannedAnimation<'_>,
) -> Result<Vec<SheetOutput>> {
    let entry = animation.entry;
    let sheet = sheet_options(manifest, entry);
    if entry.eight_way {
        let options = EightWayOptions {
            sheet,
            max_height: manifest.max_height,
            frames_per_direction: manifest.frames_per_direction_for(entry),
        };
        make_eightway_sheets(&entry.name, &animation.frames, &manifest.output_root, &options)
            .with_context(|| format!("Failed to split animation '{}'", entry.name))
    } else {
        make_sheet(&entry.name, &animation.frames, &manifest.output_root, &sheet)
            .map(|sheet| vec![sheet])
            .with_context(|| format!("Failed to pack animation '{}'", entry.name))
    }
}

/// Per-sheet options for one entry.
pub fn sheet_options(manifest: &Manifest, entry: &AnimationEntry) -> SheetOptions {
    SheetOptions {
        max_width: manifest.max_width,
        window: entry.window_size(),
        subset: None,
        stride: entry.stride,
        suffix: String::new(),
        alpha_cutoff: manifest.alpha_cutoff,
        lowercase: manifest.lowercase,
    }
}

fn write_descriptor(manifest: &Manifest) -> Result<Option<PathBuf>> {
    let Some(path) = manifest.descriptor_path() else {
        return Ok(None);
    };
    descriptor::write(&path, &manifest.animations, manifest.lowercase)
        .with_context(|| format!("Failed to write descriptor {}", path.display()))?;
    Ok(Some(path))
}
