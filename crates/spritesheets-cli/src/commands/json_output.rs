//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `bounds`, `batch` and `validate`.

use serde::{Deserialize, Serialize};
use spritesheets_backend::{BoundingBox, SheetOutput};
use spritesheets_spec::{ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// Manifest validation errors pass through with their own `M0xx` codes.
pub mod error_codes {
    /// Manifest file could not be read or parsed
    pub const MANIFEST_LOAD: &str = "CLI_001";
    /// Packing failed (wraps backend errors)
    pub const PACK_ERROR: &str = "CLI_002";
    /// Descriptor could not be written
    pub const DESCRIPTOR_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "M003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// One written sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetRecord {
    /// Animation the sheet belongs to
    pub animation: String,
    /// Path of the written PNG
    pub path: String,
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
    /// Frames placed on this sheet
    pub frames: usize,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
}

impl SheetRecord {
    pub fn new(animation: &str, sheet: &SheetOutput) -> Self {
        Self {
            animation: animation.to_string(),
            path: sheet.path.display().to_string(),
            columns: sheet.layout.columns,
            rows: sheet.layout.rows,
            width: sheet.layout.width(),
            height: sheet.layout.height(),
            frames: sheet.layout.frame_count,
            hash: sheet.hash.clone(),
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the manifest is valid
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Number of animations declared (when the manifest parsed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<usize>,
}

/// JSON output for the `batch` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Whether every animation was packed
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Sheets written, in manifest order
    pub sheets: Vec<SheetRecord>,
    /// Descriptor path, when one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

impl BatchOutput {
    /// Creates a failed batch output with no sheets.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            sheets: Vec::new(),
            descriptor: None,
        }
    }
}

/// JSON output for the `bounds` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundsOutput {
    pub animation: String,
    pub frames: usize,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Union of all per-frame boxes, 1-indexed inclusive `[min_row, max_row, min_col, max_col]`
    pub bounds: [u32; 4],
    /// Smallest centered window covering the bounds, `[width, height]`
    pub window: [u32; 2],
}

impl BoundsOutput {
    pub fn new(
        animation: &str,
        frames: usize,
        frame_size: (u32, u32),
        bounds: &BoundingBox,
        window: (u32, u32),
    ) -> Self {
        Self {
            animation: animation.to_string(),
            frames,
            frame_width: frame_size.0,
            frame_height: frame_size.1,
            bounds: [bounds.min_row, bounds.max_row, bounds.min_col, bounds.max_col],
            window: [window.0, window.1],
        }
    }
}
