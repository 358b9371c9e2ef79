//! Splitting large multi-direction animations across several sheets.
//!
//! Each sheet holds a whole number of direction groups, so one direction's
//! frames never straddle two sheets.

use std::path::Path;

use spritesheets_spec::DEFAULT_MAX_HEIGHT;
use tracing::info;

use crate::error::{Result, SheetError};
use crate::sequence::FrameSequence;
use crate::sheet::{cell_size, make_sheet, SheetOptions, SheetOutput};

/// Options for a multi-sheet split.
#[derive(Debug, Clone, PartialEq)]
pub struct EightWayOptions {
    /// Per-sheet packing options; `suffix` is extended with `_<sheet number>`.
    pub sheet: SheetOptions,
    /// Maximum sheet height in pixels.
    pub max_height: u32,
    /// Frames in one direction group.
    pub frames_per_direction: usize,
}

impl EightWayOptions {
    /// Options with default sheet bounds for the given group size.
    pub fn new(frames_per_direction: usize) -> Self {
        Self {
            sheet: SheetOptions::default(),
            max_height: DEFAULT_MAX_HEIGHT,
            frames_per_direction,
        }
    }
}

/// How a sequence is partitioned into sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightWayPlan {
    pub columns: u32,
    pub max_rows_per_sheet: u32,
    /// Direction groups per sheet.
    pub directions_per_sheet: usize,
    /// Frames per sheet (the last sheet may hold fewer).
    pub images_per_sheet: usize,
    pub sheet_count: usize,
    pub total_frames: usize,
}

impl EightWayPlan {
    /// Partition `total_frames` frames of `cell_width` x `cell_height` into bounded sheets.
    ///
    /// # Errors
    /// `UnevenDirectionGroups` when `total_frames` is not a multiple of
    /// `frames_per_direction`, `FrameWiderThanSheet` when a cell does not fit
    /// the width, and `FrameGroupTooLarge` when one group alone exceeds a sheet.
    pub fn compute(
        total_frames: usize,
        cell_width: u32,
        cell_height: u32,
        max_width: u32,
        max_height: u32,
        frames_per_direction: usize,
    ) -> Result<Self> {
        if frames_per_direction == 0 || total_frames % frames_per_direction != 0 {
            return Err(SheetError::UnevenDirectionGroups {
                total: total_frames,
                frames_per_direction,
            });
        }
        if cell_width == 0 || cell_width > max_width {
            return Err(SheetError::FrameWiderThanSheet {
                cell_width,
                max_width,
            });
        }

        let columns = max_width / cell_width;
        let max_rows_per_sheet = if cell_height == 0 {
            0
        } else {
            max_height / cell_height
        };
        let capacity = max_rows_per_sheet as usize * columns as usize;

        let directions_per_sheet = capacity / frames_per_direction;
        if directions_per_sheet == 0 {
            return Err(SheetError::FrameGroupTooLarge {
                frames_per_direction,
                capacity,
                columns,
                rows: max_rows_per_sheet,
                cell_width,
                cell_height,
            });
        }

        let images_per_sheet = frames_per_direction * directions_per_sheet;
        Ok(Self {
            columns,
            max_rows_per_sheet,
            directions_per_sheet,
            images_per_sheet,
            sheet_count: total_frames.div_ceil(images_per_sheet),
            total_frames,
        })
    }

    /// 0-based frame range of sheet `index` (1-based).
    pub fn sheet_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = (index - 1) * self.images_per_sheet;
        let end = (index * self.images_per_sheet).min(self.total_frames);
        start..end
    }
}

/// Pack a multi-direction animation into as many sheets as its bounds need.
///
/// Sheet `i` is written as `<name>_sheet<suffix>_<i>.png`. Configuration
/// errors are raised before any file is written.
pub fn make_eightway_sheets(
    name: &str,
    frames: &FrameSequence,
    out_dir: &Path,
    options: &EightWayOptions,
) -> Result<Vec<SheetOutput>> {
    let frames = options.sheet.resolve(frames)?;
    let (cell_width, cell_height) = cell_size(&frames, options.sheet.window)?;
    let plan = EightWayPlan::compute(
        frames.len(),
        cell_width,
        cell_height,
        options.sheet.max_width,
        options.max_height,
        options.frames_per_direction,
    )?;

    info!(
        animation = name,
        frames = plan.total_frames,
        sheets = plan.sheet_count,
        directions_per_sheet = plan.directions_per_sheet,
        "splitting animation"
    );

    let mut outputs = Vec::with_capacity(plan.sheet_count);
    for index in 1..=plan.sheet_count {
        let part = frames.slice(plan.sheet_range(index))?;
        let sheet_options = SheetOptions {
            subset: None,
            stride: None,
            suffix: format!("{}_{}", options.sheet.suffix, index),
            ..options.sheet.clone()
        };
        outputs.push(make_sheet(name, &part, out_dir, &sheet_options)?);
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_splits_on_group_boundaries() {
        // 8 directions x 20 frames of 192x192 in 2048x2048 sheets:
        // 10 columns x 10 rows = 100 cells, 5 groups of 20 per sheet
        let plan = EightWayPlan::compute(160, 192, 192, 2048, 2048, 20).unwrap();
        assert_eq!(plan.columns, 10);
        assert_eq!(plan.max_rows_per_sheet, 10);
        assert_eq!(plan.directions_per_sheet, 5);
        assert_eq!(plan.images_per_sheet, 100);
        assert_eq!(plan.sheet_count, 2);
        assert_eq!(plan.sheet_range(1), 0..100);
        assert_eq!(plan.sheet_range(2), 100..160);
    }

    #[test]
    fn test_ranges_cover_sequence_exactly() {
        let plan = EightWayPlan::compute(96, 64, 64, 256, 256, 12).unwrap();
        let mut covered = Vec::new();
        for index in 1..=plan.sheet_count {
            let range = plan.sheet_range(index);
            assert_eq!(range.start % plan.images_per_sheet, 0);
            covered.extend(range);
        }
        assert_eq!(covered, (0..96).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_sheet_when_everything_fits() {
        let plan = EightWayPlan::compute(16, 32, 32, 1024, 1024, 2).unwrap();
        assert_eq!(plan.sheet_count, 1);
        assert_eq!(plan.sheet_range(1), 0..16);
    }

    #[test]
    fn test_group_too_large() {
        // 4 columns x 2 rows = 8 cells, but a group needs 10
        let err = EightWayPlan::compute(80, 64, 64, 256, 128, 10).unwrap_err();
        assert!(matches!(
            err,
            SheetError::FrameGroupTooLarge {
                frames_per_direction: 10,
                capacity: 8,
                ..
            }
        ));
        assert!(err.to_string().contains("too large for sheet bounds"));
    }

    #[test]
    fn test_cell_taller_than_sheet() {
        let err = EightWayPlan::compute(8, 64, 300, 256, 256, 1).unwrap_err();
        assert!(matches!(err, SheetError::FrameGroupTooLarge { capacity: 0, .. }));
    }

    #[test]
    fn test_uneven_groups() {
        let err = EightWayPlan::compute(30, 64, 64, 1024, 1024, 8).unwrap_err();
        assert!(matches!(
            err,
            SheetError::UnevenDirectionGroups {
                total: 30,
                frames_per_direction: 8
            }
        ));
    }
}
