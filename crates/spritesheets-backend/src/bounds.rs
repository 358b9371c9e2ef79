//! Content bounding boxes.
//!
//! Boxes use 1-indexed inclusive rows and columns: a 192x192 frame with no
//! content spans `(1, 192) x (1, 192)`.

use tracing::debug;

use crate::error::Result;
use crate::frame::Frame;
use crate::sequence::FrameSequence;
use crate::window::WindowRect;

/// Smallest rectangle holding content pixels, 1-indexed and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl BoundingBox {
    /// The whole frame.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            min_row: 1,
            max_row: height,
            min_col: 1,
            max_col: width,
        }
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_row: self.min_row.min(other.min_row),
            max_row: self.max_row.max(other.max_row),
            min_col: self.min_col.min(other.min_col),
            max_col: self.max_col.max(other.max_col),
        }
    }

    /// Smallest window size that covers this box when cropped with
    /// [`crate::window::image_window`] from a `frame_width` x `frame_height` frame.
    pub fn centered_window(&self, frame_width: u32, frame_height: u32) -> (u32, u32) {
        let width = smallest_covering_span(frame_width, self.min_col, self.max_col);
        let height = smallest_covering_span(frame_height, self.min_row, self.max_row);
        (width, height)
    }
}

fn smallest_covering_span(extent: u32, min: u32, max: u32) -> u32 {
    (1..=extent)
        .find(|&size| {
            let (origin, end) = WindowRect::axis(extent, size);
            origin <= min && end >= max
        })
        .unwrap_or(extent)
}

/// Per-frame boxes for a whole animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationBoxes {
    /// One box per frame, in sequence order.
    pub boxes: Vec<BoundingBox>,
    /// `(min_row, max_row)` per frame.
    pub rows: Vec<(u32, u32)>,
    /// `(min_col, max_col)` per frame.
    pub cols: Vec<(u32, u32)>,
}

/// Bound the content of one frame.
///
/// A pixel is content when its alpha is at least `cutoff` and it is not the
/// all-zero pixel. A frame without content returns its full extent; callers
/// cannot tell an empty frame from a full one by the box alone.
pub fn get_box(frame: &Frame, cutoff: f64) -> BoundingBox {
    let mut found: Option<BoundingBox> = None;

    for y in 0..frame.height {
        for x in 0..frame.width {
            let pixel = frame.get(x, y);
            if pixel.a < cutoff || pixel.is_zero() {
                continue;
            }
            let (row, col) = (y + 1, x + 1);
            found = Some(match found {
                None => BoundingBox {
                    min_row: row,
                    max_row: row,
                    min_col: col,
                    max_col: col,
                },
                Some(b) => BoundingBox {
                    min_row: b.min_row.min(row),
                    max_row: b.max_row.max(row),
                    min_col: b.min_col.min(col),
                    max_col: b.max_col.max(col),
                },
            });
        }
    }

    found.unwrap_or_else(|| BoundingBox::full(frame.width, frame.height))
}

/// Load every frame of an animation and bound each one.
pub fn get_all_boxes(frames: &FrameSequence, cutoff: f64) -> Result<AnimationBoxes> {
    let mut boxes = Vec::with_capacity(frames.len());
    for path in frames.iter() {
        let frame = Frame::load(path)?;
        let bbox = get_box(&frame, cutoff);
        debug!(frame = %path.display(), ?bbox, "bounded frame");
        boxes.push(bbox);
    }

    let rows = boxes.iter().map(|b| (b.min_row, b.max_row)).collect();
    let cols = boxes.iter().map(|b| (b.min_col, b.max_col)).collect();
    Ok(AnimationBoxes { boxes, rows, cols })
}

/// Union of all per-frame boxes; `None` when there are none.
pub fn find_animation_bounds(boxes: &[BoundingBox]) -> Option<BoundingBox> {
    boxes
        .iter()
        .copied()
        .reduce(|acc, b| acc.union(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_empty_frame_falls_back_to_full_extent() {
        let mut frame = Frame::transparent(7, 5);
        frame.set(3, 2, Color::rgba(1.0, 1.0, 1.0, 0.05));
        assert_eq!(get_box(&frame, 0.1), BoundingBox::full(7, 5));
        assert_eq!(
            get_box(&frame, 0.1),
            BoundingBox {
                min_row: 1,
                max_row: 5,
                min_col: 1,
                max_col: 7
            }
        );
    }

    #[test]
    fn test_single_pixel() {
        let mut frame = Frame::transparent(10, 8);
        frame.set(6, 2, Color::rgba(0.2, 0.3, 0.4, 1.0));
        let bbox = get_box(&frame, 0.5);
        assert_eq!(
            bbox,
            BoundingBox {
                min_row: 3,
                max_row: 3,
                min_col: 7,
                max_col: 7
            }
        );
        assert_eq!((bbox.width(), bbox.height()), (1, 1));
    }

    #[test]
    fn test_zero_cutoff_ignores_all_zero_pixels() {
        let mut frame = Frame::transparent(4, 4);
        frame.set(0, 3, Color::rgba(0.5, 0.0, 0.0, 0.0));
        frame.set(2, 1, Color::rgba(0.0, 0.0, 0.0, 0.0));
        let bbox = get_box(&frame, 0.0);
        assert_eq!(
            bbox,
            BoundingBox {
                min_row: 4,
                max_row: 4,
                min_col: 1,
                max_col: 1
            }
        );
    }

    #[test]
    fn test_box_spans_multiple_pixels() {
        let mut frame = Frame::transparent(10, 10);
        frame.set(2, 7, Color::rgb(1.0, 0.0, 0.0));
        frame.set(8, 1, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(
            get_box(&frame, 0.5),
            BoundingBox {
                min_row: 2,
                max_row: 8,
                min_col: 3,
                max_col: 9
            }
        );
    }

    #[test]
    fn test_find_animation_bounds() {
        let boxes = [
            BoundingBox {
                min_row: 4,
                max_row: 10,
                min_col: 5,
                max_col: 6,
            },
            BoundingBox {
                min_row: 2,
                max_row: 8,
                min_col: 7,
                max_col: 12,
            },
        ];
        assert_eq!(
            find_animation_bounds(&boxes),
            Some(BoundingBox {
                min_row: 2,
                max_row: 10,
                min_col: 5,
                max_col: 12
            })
        );
        assert_eq!(find_animation_bounds(&[]), None);
    }

    #[test]
    fn test_centered_window_covers_box() {
        let bbox = BoundingBox {
            min_row: 40,
            max_row: 150,
            min_col: 80,
            max_col: 110,
        };
        let (w, h) = bbox.centered_window(192, 192);

        let (col_origin, col_end) = WindowRect::axis(192, w);
        let (row_origin, row_end) = WindowRect::axis(192, h);
        assert!(col_origin <= 80 && col_end >= 110);
        assert!(row_origin <= 40 && row_end >= 150);

        // one pixel smaller no longer covers
        let (o, e) = WindowRect::axis(192, w - 1);
        assert!(o > 80 || e < 110);
    }

    #[test]
    fn test_centered_window_full_box_is_full_frame() {
        assert_eq!(BoundingBox::full(64, 32).centered_window(64, 32), (64, 32));
    }
}
