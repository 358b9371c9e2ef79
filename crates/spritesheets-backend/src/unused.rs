//! Detecting rendered frames the game never plays.
//!
//! Animations are often rendered at a finer step than they are packed. When
//! a directory holds an exact multiple of the frames an animation uses, the
//! frames between the regularly spaced ones are unused.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, SheetError};
use crate::sequence::FrameSequence;

/// Frames left out when keeping `used_count` evenly spaced frames.
///
/// With `stride = len / used_count`, frames `0, stride, 2 * stride, ...` are
/// used. A length that is not a multiple of `used_count` only logs a warning
/// and reports nothing.
pub fn unused_frames(frames: &FrameSequence, used_count: usize) -> Vec<PathBuf> {
    if used_count == 0 || frames.len() % used_count != 0 {
        warn!(
            frames = frames.len(),
            used_count,
            first = %frames.first().display(),
            "frame count is not a multiple of the used count; skipping unused-frame detection"
        );
        return Vec::new();
    }

    let stride = frames.len() / used_count;
    frames
        .paths()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride != 0)
        .map(|(_, path)| path.clone())
        .collect()
}

/// Move frames into `dest`, keeping their file names.
pub fn move_frames(frames: &[PathBuf], dest: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dest).map_err(|e| SheetError::io(dest, e))?;

    let mut moved = Vec::with_capacity(frames.len());
    for path in frames {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = dest.join(file_name);
        std::fs::rename(path, &target).map_err(|e| SheetError::io(path, e))?;
        moved.push(target);
    }

    info!(dest = %dest.display(), count = moved.len(), "moved unused frames");
    Ok(moved)
}
