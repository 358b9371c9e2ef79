//! Error types for manifest validation and loading.

use thiserror::Error;

/// Error codes for manifest validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// M001: Manifest declares no animations
    NoAnimations,
    /// M002: Animation name is empty or contains path separators
    InvalidAnimationName,
    /// M003: Two animations share the same name
    DuplicateAnimationName,
    /// M004: Sheet bounds must be non-zero
    InvalidSheetBounds,
    /// M005: Alpha cutoff outside [0, 1]
    CutoffOutOfRange,
    /// M006: Crop window has a zero dimension
    InvalidWindow,
    /// M007: Eight-way animation without a frames-per-direction value
    MissingFramesPerDirection,
    /// M008: Unsafe descriptor path (absolute or traversal)
    UnsafeDescriptorPath,
    /// M009: Stride of zero
    InvalidStride,
    /// M010: Playback speed is not a positive finite number
    InvalidSpeed,
    /// M011: Crop window wider than the maximum sheet width
    WindowWiderThanSheet,
    /// M012: One eight-way direction group does not fit on a sheet
    DirectionGroupTooLarge,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "M001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NoAnimations => "M001",
            ErrorCode::InvalidAnimationName => "M002",
            ErrorCode::DuplicateAnimationName => "M003",
            ErrorCode::InvalidSheetBounds => "M004",
            ErrorCode::CutoffOutOfRange => "M005",
            ErrorCode::InvalidWindow => "M006",
            ErrorCode::MissingFramesPerDirection => "M007",
            ErrorCode::UnsafeDescriptorPath => "M008",
            ErrorCode::InvalidStride => "M009",
            ErrorCode::InvalidSpeed => "M010",
            ErrorCode::WindowWiderThanSheet => "M011",
            ErrorCode::DirectionGroupTooLarge => "M012",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for manifest validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Window taller than `max_height` on a sheet that is not height-bounded
    WindowExceedsSheet,
    /// W002: Eight-way `frame_count` differs from the manifest's `frames_per_direction`
    UnevenEightWayCount,
    /// W003: No descriptor will be written
    MissingDescriptor,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::WindowExceedsSheet => "W001",
            WarningCode::UnevenEightWayCount => "W002",
            WarningCode::MissingDescriptor => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "animations\[0\].window").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of manifest validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidWindow,
            "window must be non-zero",
            "animations[2].window",
        );
        assert_eq!(
            err.to_string(),
            "M006: window must be non-zero (at animations[2].window)"
        );
    }

    #[test]
    fn test_result_tracks_ok_flag() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(
            WarningCode::MissingDescriptor,
            "no descriptor",
        ));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::NoAnimations, "empty"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::NoAnimations));
    }
}
