//! Ordered frame lists.
//!
//! A [`FrameSequence`] is built once per animation and handed to every
//! operation, so frame order never depends on how the host filesystem
//! happens to list a directory.

use std::collections::HashSet;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SheetError};

/// File extensions treated as frames when scanning a directory.
pub const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "tif", "tiff", "webp"];

/// An ordered, non-empty list of frame files for one animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<PathBuf>,
}

impl FrameSequence {
    /// Build a sequence from an explicit ordered path list.
    ///
    /// Fails if the list is empty or names the same file twice.
    pub fn from_paths(paths: Vec<PathBuf>) -> Result<Self> {
        if paths.is_empty() {
            return Err(SheetError::EmptySequence(PathBuf::new()));
        }
        let mut seen = HashSet::new();
        for path in &paths {
            if !seen.insert(path) {
                return Err(SheetError::DuplicateFrame(path.clone()));
            }
        }
        Ok(Self { frames: paths })
    }

    /// Scan a directory for frame images, ordered by file name.
    ///
    /// Zero-padded numbering (`Walk_001.png`, `Walk_003.png`, ...) yields
    /// temporal order; gaps are fine.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| SheetError::io(dir, e))?;

        let mut frames = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SheetError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() && is_frame_file(&path) {
                frames.push(path);
            }
        }

        if frames.is_empty() {
            return Err(SheetError::EmptySequence(dir.to_path_buf()));
        }

        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %dir.display(), count = frames.len(), "scanned frame directory");
        Ok(Self { frames })
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// First frame path.
    pub fn first(&self) -> &Path {
        &self.frames[0]
    }

    /// Frame paths in order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.frames
    }

    /// Iterate over frame paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.frames.iter().map(PathBuf::as_path)
    }

    /// Keep the named files, in the order given.
    ///
    /// Names match either the full path or the file name.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut picked = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let found = self.frames.iter().find(|path| {
                path.as_os_str() == name
                    || path.file_name().and_then(|f| f.to_str()) == Some(name)
            });
            match found {
                Some(path) => picked.push(path.clone()),
                None => return Err(SheetError::UnknownFrame(name.to_string())),
            }
        }
        Self::from_paths(picked)
    }

    /// Keep every `stride`-th frame, starting with the first.
    pub fn step(&self, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(SheetError::InvalidStride);
        }
        Ok(Self {
            frames: self.frames.iter().step_by(stride).cloned().collect(),
        })
    }

    /// Contiguous sub-range of the sequence.
    ///
    /// The range is clamped to the sequence length.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let end = range.end.min(self.frames.len());
        let start = range.start.min(end);
        Self::from_paths(self.frames[start..end].to_vec())
    }
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| FRAME_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(names: &[&str]) -> FrameSequence {
        FrameSequence::from_paths(names.iter().map(|n| PathBuf::from(format!("walk/{n}"))).collect())
            .unwrap()
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(matches!(
            FrameSequence::from_paths(vec![]),
            Err(SheetError::EmptySequence(_))
        ));
        let dup = vec![PathBuf::from("a.png"), PathBuf::from("a.png")];
        assert!(matches!(
            FrameSequence::from_paths(dup),
            Err(SheetError::DuplicateFrame(_))
        ));
    }

    #[test]
    fn test_step() {
        let seq = sequence(&["1.png", "2.png", "3.png", "4.png", "5.png"]);
        let stepped = seq.step(2).unwrap();
        let names: Vec<_> = stepped
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["1.png", "3.png", "5.png"]);
        assert!(matches!(seq.step(0), Err(SheetError::InvalidStride)));
    }

    #[test]
    fn test_select_keeps_given_order() {
        let seq = sequence(&["1.png", "2.png", "3.png"]);
        let picked = seq.select(&["3.png", "1.png"]).unwrap();
        assert_eq!(
            picked.paths(),
            [PathBuf::from("walk/3.png"), PathBuf::from("walk/1.png")]
        );
        assert!(matches!(
            seq.select(&["9.png"]),
            Err(SheetError::UnknownFrame(name)) if name == "9.png"
        ));
    }

    #[test]
    fn test_slice_clamps() {
        let seq = sequence(&["1.png", "2.png", "3.png"]);
        assert_eq!(seq.slice(1..10).unwrap().len(), 2);
        assert!(seq.slice(3..5).is_err());
    }

    #[test]
    fn test_from_dir_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Walk_010.png", "Walk_002.png", "notes.txt", "Walk_001.PNG"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let seq = FrameSequence::from_dir(dir.path()).unwrap();
        let names: Vec<_> = seq
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Walk_001.PNG", "Walk_002.png", "Walk_010.png"]);
    }

    #[test]
    fn test_from_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FrameSequence::from_dir(dir.path()),
            Err(SheetError::EmptySequence(_))
        ));
    }
}
