//! Grid sheet packing.
//!
//! Frames are placed left-to-right, top-to-bottom in equally sized cells.
//! Each frame is loaded, optionally cropped to a centered window, cleaned
//! with [`remove_floor`], and copied into its cell. Unused cells stay
//! fully transparent.

use std::path::{Path, PathBuf};

use spritesheets_spec::DEFAULT_ALPHA_CUTOFF;
use spritesheets_spec::DEFAULT_MAX_WIDTH;
use tracing::{debug, info};

use crate::cleanup::remove_floor;
use crate::error::{Result, SheetError};
use crate::frame::Frame;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig};
use crate::sequence::FrameSequence;
use crate::window::image_window;

/// File extension of written sheets.
pub const SHEET_EXTENSION: &str = "png";

/// Options for packing one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOptions {
    /// Maximum sheet width in pixels.
    pub max_width: u32,
    /// Centered crop `(width, height)` applied to every frame.
    pub window: Option<(u32, u32)>,
    /// Explicit frames to pack, by file name, in packing order.
    pub subset: Option<Vec<String>>,
    /// Keep every n-th frame.
    pub stride: Option<usize>,
    /// Appended to the file stem after `_sheet`.
    pub suffix: String,
    /// Alpha below which pixels are cleared.
    pub alpha_cutoff: f64,
    /// Lowercase the animation name in the file name.
    pub lowercase: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            window: None,
            subset: None,
            stride: None,
            suffix: String::new(),
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            lowercase: false,
        }
    }
}

impl SheetOptions {
    /// File name of the sheet written for `name`.
    pub fn file_name(&self, name: &str) -> String {
        let stem = if self.lowercase {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        format!("{}_sheet{}.{}", stem, self.suffix, SHEET_EXTENSION)
    }

    /// Apply the explicit subset and stride to a sequence.
    pub fn resolve(&self, frames: &FrameSequence) -> Result<FrameSequence> {
        let selected = match &self.subset {
            Some(names) => frames.select(names)?,
            None => frames.clone(),
        };
        match self.stride {
            Some(stride) => selected.step(stride),
            None => Ok(selected),
        }
    }
}

/// Grid geometry of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Cells per row.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
    /// Cell width in pixels.
    pub cell_width: u32,
    /// Cell height in pixels.
    pub cell_height: u32,
    /// Frames placed in the grid.
    pub frame_count: usize,
}

impl SheetLayout {
    /// Lay out `frame_count` cells of `cell_width` x `cell_height` under `max_width`.
    pub fn compute(
        frame_count: usize,
        cell_width: u32,
        cell_height: u32,
        max_width: u32,
    ) -> Result<Self> {
        if cell_width == 0 || cell_width > max_width {
            return Err(SheetError::FrameWiderThanSheet {
                cell_width,
                max_width,
            });
        }
        let columns = (max_width / cell_width).max(1);
        let rows = frame_count.div_ceil(columns as usize) as u32;
        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            frame_count,
        })
    }

    /// Sheet width in pixels.
    pub fn width(&self) -> u32 {
        self.cell_width * self.columns
    }

    /// Sheet height in pixels.
    pub fn height(&self) -> u32 {
        self.rows * self.cell_height
    }

    /// Top-left pixel of the k-th cell (0-based, row-major).
    pub fn cell_origin(&self, k: usize) -> (u32, u32) {
        let row = (k / self.columns as usize) as u32;
        let col = (k % self.columns as usize) as u32;
        (col * self.cell_width, row * self.cell_height)
    }
}

/// A sheet written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOutput {
    /// Path of the written PNG.
    pub path: PathBuf,
    /// Grid geometry; `layout.columns` is the columns-per-row.
    pub layout: SheetLayout,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    /// Frames placed, in cell order.
    pub frames: Vec<PathBuf>,
}

/// Cell size for a sequence: the crop window if set, else the first frame's size.
pub fn cell_size(frames: &FrameSequence, window: Option<(u32, u32)>) -> Result<(u32, u32)> {
    match window {
        Some(size) => Ok(size),
        None => Ok(Frame::load(frames.first())?.dimensions()),
    }
}

/// Pack the frames of one animation into a single sheet.
///
/// Writes `<out_dir>/<name>_sheet<suffix>.png` and returns its layout.
///
/// # Errors
/// Fails on an unknown subset name, a zero stride, a cell wider than
/// `max_width`, a frame whose (cropped) size differs from the cell, and on
/// decode or write failures.
pub fn make_sheet(
    name: &str,
    frames: &FrameSequence,
    out_dir: &Path,
    options: &SheetOptions,
) -> Result<SheetOutput> {
    let frames = options.resolve(frames)?;
    let (cell_width, cell_height) = cell_size(&frames, options.window)?;
    let layout = SheetLayout::compute(frames.len(), cell_width, cell_height, options.max_width)?;

    let mut sheet = Frame::transparent(layout.width(), layout.height());

    for (k, path) in frames.iter().enumerate() {
        let frame = Frame::load(path)?;
        let mut cell = match options.window {
            Some((width, height)) => image_window(&frame, width, height).into_owned(),
            None => frame,
        };

        if cell.dimensions() != (cell_width, cell_height) {
            return Err(SheetError::FrameSizeMismatch {
                path: path.to_path_buf(),
                width: cell.width,
                height: cell.height,
                cell_width,
                cell_height,
            });
        }

        remove_floor(&mut cell, options.alpha_cutoff);

        let (x, y) = layout.cell_origin(k);
        sheet.blit(&cell, x, y);
        debug!(frame = %path.display(), cell = k, x, y, "placed frame");
    }

    std::fs::create_dir_all(out_dir).map_err(|e| SheetError::io(out_dir, e))?;
    let path = out_dir.join(options.file_name(name));
    let (data, hash) = write_rgba_to_vec_with_hash(&sheet, &PngConfig::default())?;
    std::fs::write(&path, &data).map_err(|e| SheetError::io(&path, e))?;

    info!(
        sheet = %path.display(),
        frames = layout.frame_count,
        columns = layout.columns,
        rows = layout.rows,
        width = layout.width(),
        height = layout.height(),
        "wrote sheet"
    );

    Ok(SheetOutput {
        path,
        layout,
        hash,
        frames: frames.paths().to_vec(),
    })
}
