//! Test fixture utilities for creating synthetic render trees.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use spritesheets_spec::Manifest;
use tempfile::TempDir;

/// Faint background alpha left by a renderer; cleared by any cutoff above 0.032.
pub const NOISE_ALPHA: u8 = 8;

/// A temp directory laid out like a render output: `renders/<animation>/*.png`.
pub struct RenderFixture {
    pub root: TempDir,
}

impl RenderFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("renders")).expect("Failed to create renders dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding one sub-directory per animation.
    pub fn renders_dir(&self) -> PathBuf {
        self.path().join("renders")
    }

    /// Directory sheets are written to by fixture manifests.
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("sheets")
    }

    /// Write `count` frames for one animation.
    ///
    /// Each frame has a faint noisy background, an opaque block in the
    /// middle, and its 0-based index in the red channel of pixel (0, 0).
    pub fn add_animation(&self, name: &str, count: usize, width: u32, height: u32) -> PathBuf {
        let dir = self.renders_dir().join(name);
        fs::create_dir_all(&dir).expect("Failed to create animation dir");

        for index in 0..count {
            let mut image = RgbaImage::from_pixel(width, height, Rgba([1, 1, 1, NOISE_ALPHA]));
            for y in height / 4..height * 3 / 4 {
                for x in width / 4..width * 3 / 4 {
                    image.put_pixel(x, y, Rgba([90, 160, 40, 255]));
                }
            }
            image.put_pixel(0, 0, Rgba([index as u8, 0, 0, 255]));
            image
                .save(dir.join(format!("{}_{:04}.png", name, index + 1)))
                .expect("Failed to write frame");
        }
        dir
    }

    /// A manifest rooted at this fixture, with no animations.
    pub fn manifest(&self) -> Manifest {
        Manifest::new("renders", "sheets")
    }

    /// Write a manifest as `manifest.json` and return its path.
    pub fn write_manifest(&self, manifest: &Manifest) -> PathBuf {
        let json = manifest
            .to_json_pretty()
            .expect("Failed to serialize manifest");
        self.write_manifest_text(&json)
    }

    /// Write raw manifest text as `manifest.json` and return its path.
    pub fn write_manifest_text(&self, text: &str) -> PathBuf {
        let path = self.path().join("manifest.json");
        fs::write(&path, text).expect("Failed to write manifest");
        path
    }
}

impl Default for RenderFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_animation_writes_numbered_frames() {
        let fixture = RenderFixture::new();
        let dir = fixture.add_animation("Idle", 3, 8, 8);
        assert!(dir.join("Idle_0001.png").exists());
        assert!(dir.join("Idle_0003.png").exists());
        assert!(!dir.join("Idle_0004.png").exists());
    }

    #[test]
    fn test_manifest_resolves_against_fixture() {
        let fixture = RenderFixture::new();
        let path = fixture.write_manifest(&fixture.manifest());
        let loaded = Manifest::from_file(&path).unwrap();
        assert_eq!(loaded.source_root, fixture.renders_dir());
        assert_eq!(loaded.output_root, fixture.out_dir());
    }
}
