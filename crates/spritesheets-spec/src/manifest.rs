//! Batch manifest type.
//!
//! A manifest describes one character's worth of animations: where the
//! rendered frames live, where sheets go, the sheet bounds shared by every
//! animation, and the ordered list of [`AnimationEntry`] records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::AnimationEntry;
use crate::error::ManifestError;

/// Default maximum sheet width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 4096;

/// Default maximum sheet height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 4096;

/// Default alpha cutoff for background cleanup.
pub const DEFAULT_ALPHA_CUTOFF: f64 = 0.1;

/// A batch of animations to pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory holding one sub-directory of frames per animation.
    pub source_root: PathBuf,

    /// Directory that receives sheets and the descriptor.
    pub output_root: PathBuf,

    /// Maximum sheet width in pixels.
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Maximum sheet height in pixels (eight-way splitting only).
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Alpha below which pixels are cleared before packing.
    #[serde(default = "default_alpha_cutoff")]
    pub alpha_cutoff: f64,

    /// Lowercase animation names in sheet file names.
    #[serde(default)]
    pub lowercase: bool,

    /// Frames per direction group for eight-way animations.
    ///
    /// Falls back to each entry's `frame_count` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_per_direction: Option<usize>,

    /// Descriptor file name, relative to `output_root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,

    /// Animations in descriptor order.
    pub animations: Vec<AnimationEntry>,
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

fn default_alpha_cutoff() -> f64 {
    DEFAULT_ALPHA_CUTOFF
}

impl Manifest {
    /// Creates a manifest with default bounds and no animations.
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            lowercase: false,
            frames_per_direction: None,
            descriptor: None,
            animations: Vec::new(),
        }
    }

    /// Parses a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// Relative `source_root`/`output_root` values are resolved against the
    /// manifest's own directory.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)?;
        let mut manifest = Self::from_json(&text)?;
        if let Some(base) = path.parent() {
            manifest.source_root = base.join(&manifest.source_root);
            manifest.output_root = base.join(&manifest.output_root);
        }
        Ok(manifest)
    }

    /// Serializes to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Directory holding the frames of one animation.
    pub fn animation_dir(&self, entry: &AnimationEntry) -> PathBuf {
        self.source_root.join(&entry.name)
    }

    /// Direction group size for an eight-way entry.
    pub fn frames_per_direction_for(&self, entry: &AnimationEntry) -> usize {
        self.frames_per_direction.unwrap_or(entry.frame_count)
    }

    /// Full descriptor path, if one is configured.
    pub fn descriptor_path(&self) -> Option<PathBuf> {
        self.descriptor
            .as_ref()
            .map(|name| self.output_root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SQUIRREL: &str = r#"{
        "source_root": "renders/squirrel",
        "output_root": "sheets/squirrel",
        "lowercase": true,
        "frames_per_direction": 20,
        "descriptor": "squirrel_frames.tres",
        "animations": [
            { "name": "Idle1", "eight_way": true, "window": [192, 192], "frame_count": 20 },
            { "name": "Walk", "eight_way": true, "speed": 12.0, "frame_count": 20, "stride": 2 }
        ]
    }"#;

    #[test]
    fn test_parse_with_defaults() {
        let manifest = Manifest::from_json(SQUIRREL).unwrap();
        assert_eq!(manifest.max_width, DEFAULT_MAX_WIDTH);
        assert_eq!(manifest.max_height, DEFAULT_MAX_HEIGHT);
        assert_eq!(manifest.alpha_cutoff, DEFAULT_ALPHA_CUTOFF);
        assert_eq!(manifest.animations.len(), 2);
        assert_eq!(manifest.animations[1].stride, Some(2));
        assert_eq!(
            manifest.animation_dir(&manifest.animations[0]),
            PathBuf::from("renders/squirrel/Idle1")
        );
        assert_eq!(
            manifest.descriptor_path(),
            Some(PathBuf::from("sheets/squirrel/squirrel_frames.tres"))
        );
    }

    #[test]
    fn test_frames_per_direction_falls_back_to_frame_count() {
        let mut manifest = Manifest::new("in", "out");
        let entry = AnimationEntry::new("Run", 16).eight_way();
        assert_eq!(manifest.frames_per_direction_for(&entry), 16);
        manifest.frames_per_direction = Some(8);
        assert_eq!(manifest.frames_per_direction_for(&entry), 8);
    }

    #[test]
    fn test_json_roundtrip_preserves_entries() {
        let manifest = Manifest::from_json(SQUIRREL).unwrap();
        let json = manifest.to_json_pretty().unwrap();
        let parsed = Manifest::from_json(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_missing_animations_is_parse_error() {
        let err = Manifest::from_json(r#"{"source_root": "a", "output_root": "b"}"#);
        assert!(matches!(err, Err(ManifestError::JsonParse(_))));
    }
}
