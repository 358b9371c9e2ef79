//! Spritesheets Manifest Library
//!
//! This crate provides the types and validation for spritesheet batch
//! manifests. A manifest is a JSON document naming a directory of rendered
//! frames per animation, the sheet bounds, and one record per animation.
//!
//! # Example
//!
//! ```
//! use spritesheets_spec::{AnimationEntry, Manifest};
//! use spritesheets_spec::validation::validate_manifest;
//!
//! let mut manifest = Manifest::new("renders/squirrel", "sheets/squirrel");
//! manifest.lowercase = true;
//! manifest.descriptor = Some("squirrel_frames.tres".to_string());
//! manifest.animations.push(AnimationEntry::new("Idle1", 20).eight_way());
//! manifest.animations.push(AnimationEntry::new("Walk", 20).eight_way().speed(12.0));
//!
//! assert!(validate_manifest(&manifest).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`animation`]: Per-animation records
//! - [`error`]: Error and warning types for validation
//! - [`manifest`]: The batch manifest
//! - [`validation`]: Manifest validation functions

pub mod animation;
pub mod error;
pub mod manifest;
pub mod validation;

// Re-export commonly used types at the crate root
pub use animation::{AnimationEntry, EIGHT_WAY_DIRECTIONS};
pub use error::{
    ErrorCode, ManifestError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use manifest::{Manifest, DEFAULT_ALPHA_CUTOFF, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
pub use validation::validate_manifest;
