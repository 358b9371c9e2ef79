//! Errors produced by the sheet pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::png::PngError;

/// Errors that can occur while loading, packing, or blending frames.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A frame sequence was built from nothing.
    #[error("No frames found in '{0}'")]
    EmptySequence(PathBuf),

    /// The same file appears twice in a frame sequence.
    #[error("Frame '{0}' appears more than once in the sequence")]
    DuplicateFrame(PathBuf),

    /// An explicit subset names a file the sequence does not contain.
    #[error("Frame '{0}' is not part of the sequence")]
    UnknownFrame(String),

    /// Stride must be at least one.
    #[error("Frame stride must be at least 1")]
    InvalidStride,

    /// A single cell does not fit in the sheet width.
    #[error("Frame width {cell_width} exceeds maximum sheet width {max_width}")]
    FrameWiderThanSheet { cell_width: u32, max_width: u32 },

    /// One direction group needs more cells than a whole sheet holds.
    #[error(
        "Frame group too large for sheet bounds: {frames_per_direction} frames per direction, \
         sheet holds {capacity} ({columns} columns x {rows} rows of {cell_width}x{cell_height})"
    )]
    FrameGroupTooLarge {
        frames_per_direction: usize,
        capacity: usize,
        columns: u32,
        rows: u32,
        cell_width: u32,
        cell_height: u32,
    },

    /// Eight-way input does not split into whole direction groups.
    #[error("{total} frames do not divide into groups of {frames_per_direction}")]
    UnevenDirectionGroups {
        total: usize,
        frames_per_direction: usize,
    },

    /// A packed frame differs in size from the sheet cell.
    #[error("Frame '{path}' is {width}x{height} but the sheet cell is {cell_width}x{cell_height}")]
    FrameSizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
    },

    /// Blending needs two animations of equal length.
    #[error("Cannot blend animations of different lengths ({first} vs {second} frames)")]
    MismatchedAnimationLengths { first: usize, second: usize },

    /// Filesystem error with the offending path.
    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image codec could not read a frame.
    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),
}

impl SheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SheetError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
