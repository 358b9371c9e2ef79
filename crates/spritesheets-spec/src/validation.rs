//! Manifest validation logic.

use std::collections::HashSet;

use crate::animation::{AnimationEntry, EIGHT_WAY_DIRECTIONS};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::manifest::Manifest;

/// Validates a manifest and returns a validation result.
///
/// # Arguments
/// * `manifest` - The manifest to validate
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
///
/// # Example
/// ```
/// use spritesheets_spec::{AnimationEntry, Manifest};
/// use spritesheets_spec::validation::validate_manifest;
///
/// let mut manifest = Manifest::new("renders/squirrel", "sheets/squirrel");
/// manifest.descriptor = Some("squirrel.tres".to_string());
/// manifest.animations.push(AnimationEntry::new("Idle1", 20).window(192, 192));
///
/// let result = validate_manifest(&manifest);
/// assert!(result.is_ok());
/// ```
pub fn validate_manifest(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_bounds(manifest, &mut result);
    validate_descriptor(manifest, &mut result);

    if manifest.animations.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoAnimations,
            "manifest must declare at least one animation",
            "animations",
        ));
    }

    let mut seen = HashSet::new();
    for (index, entry) in manifest.animations.iter().enumerate() {
        if !seen.insert(entry.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateAnimationName,
                format!("duplicate animation name '{}'", entry.name),
                format!("animations[{}].name", index),
            ));
        }
        validate_entry(manifest, entry, index, &mut result);
    }

    result
}

fn validate_bounds(manifest: &Manifest, result: &mut ValidationResult) {
    if manifest.max_width == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSheetBounds,
            "max_width must be greater than zero",
            "max_width",
        ));
    }
    if manifest.max_height == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSheetBounds,
            "max_height must be greater than zero",
            "max_height",
        ));
    }
    if !(0.0..=1.0).contains(&manifest.alpha_cutoff) {
        result.add_error(ValidationError::with_path(
            ErrorCode::CutoffOutOfRange,
            format!(
                "alpha_cutoff must be in [0, 1], got {}",
                manifest.alpha_cutoff
            ),
            "alpha_cutoff",
        ));
    }
    if manifest.frames_per_direction == Some(0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::MissingFramesPerDirection,
            "frames_per_direction must be greater than zero",
            "frames_per_direction",
        ));
    }
}

fn validate_descriptor(manifest: &Manifest, result: &mut ValidationResult) {
    match manifest.descriptor.as_deref() {
        None => result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescriptor,
            "no descriptor file configured; only sheets will be written",
            "descriptor",
        )),
        Some(path) => {
            for message in relative_path_safety_errors(path) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::UnsafeDescriptorPath,
                    message,
                    "descriptor",
                ));
            }
        }
    }
}

fn validate_entry(
    manifest: &Manifest,
    entry: &AnimationEntry,
    index: usize,
    result: &mut ValidationResult,
) {
    let field = |name: &str| format!("animations[{}].{}", index, name);

    if entry.name.is_empty()
        || entry.name.contains('/')
        || entry.name.contains('\\')
        || entry.name == "."
        || entry.name == ".."
    {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAnimationName,
            format!(
                "animation name must be a plain directory name: '{}'",
                entry.name
            ),
            field("name"),
        ));
    }

    if !entry.speed.is_finite() || entry.speed <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSpeed,
            format!("speed must be a positive number, got {}", entry.speed),
            field("speed"),
        ));
    }

    if entry.stride == Some(0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidStride,
            "stride must be at least 1",
            field("stride"),
        ));
    }

    let per_direction = manifest.frames_per_direction_for(entry);

    if let Some([width, height]) = entry.window {
        if width == 0 || height == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidWindow,
                format!("window must be non-zero, got {}x{}", width, height),
                field("window"),
            ));
        } else if width > manifest.max_width {
            result.add_error(ValidationError::with_path(
                ErrorCode::WindowWiderThanSheet,
                format!(
                    "window width {} exceeds max_width {}",
                    width, manifest.max_width
                ),
                field("window"),
            ));
        } else if entry.eight_way {
            let capacity =
                (manifest.max_width / width) as usize * (manifest.max_height / height) as usize;
            if per_direction > 0 && capacity < per_direction {
                result.add_error(ValidationError::with_path(
                    ErrorCode::DirectionGroupTooLarge,
                    format!(
                        "{} frames per direction do not fit a {}x{} sheet of {}x{} cells (capacity {})",
                        per_direction,
                        manifest.max_width,
                        manifest.max_height,
                        width,
                        height,
                        capacity
                    ),
                    field("window"),
                ));
            }
        } else if height > manifest.max_height {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::WindowExceedsSheet,
                format!(
                    "window height {} exceeds max_height {}; single sheets are not height-bounded",
                    height, manifest.max_height
                ),
                field("window"),
            ));
        }
    }

    if entry.eight_way {
        if per_direction == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::MissingFramesPerDirection,
                "eight-way animation needs frames_per_direction or a non-zero frame_count",
                field("frame_count"),
            ));
        } else if per_direction != entry.frame_count {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnevenEightWayCount,
                format!(
                    "frame_count {} differs from frames_per_direction {}; sheet groups will not line up with the {} directions",
                    entry.frame_count, per_direction, EIGHT_WAY_DIRECTIONS
                ),
                field("frame_count"),
            ));
        }
    }
}

/// Checks that a path stays inside the output root.
pub fn is_safe_relative_path(path: &str) -> bool {
    relative_path_safety_errors(path).is_empty()
}

fn relative_path_safety_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push("path cannot be empty".to_string());
        return errors;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        errors.push(format!("path must be relative, not absolute: '{}'", path));
    }

    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        errors.push(format!("path must not contain drive letter: '{}'", path));
    }

    if path.split(['/', '\\']).any(|segment| segment == "..") {
        errors.push(format!("path must not contain '..' segments: '{}'", path));
    }

    errors
}
