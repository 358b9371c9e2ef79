//! Centered crop windows.

use std::borrow::Cow;

use crate::frame::Frame;

/// A crop rectangle, 1-indexed and inclusive like [`crate::bounds::BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u32,
    pub last_col: u32,
}

impl WindowRect {
    /// Center a `new_width` x `new_height` window in a frame, clamped to the frame.
    pub fn centered(width: u32, height: u32, new_width: u32, new_height: u32) -> Self {
        let (first_col, last_col) = Self::axis(width, new_width);
        let (first_row, last_row) = Self::axis(height, new_height);
        Self {
            first_row,
            last_row,
            first_col,
            last_col,
        }
    }

    /// Inclusive `(origin, end)` of a centered span along one axis.
    ///
    /// `origin = max(extent / 2 - size / 2 + 1, 1)` and
    /// `end = min(extent, origin + size - 1)`.
    pub fn axis(extent: u32, size: u32) -> (u32, u32) {
        let center = i64::from(extent / 2);
        let origin = (center - i64::from(size / 2) + 1).max(1);
        let end = (origin + i64::from(size) - 1).min(i64::from(extent));
        (origin as u32, end.max(origin - 1) as u32)
    }

    /// Width of the clamped window.
    pub fn width(&self) -> u32 {
        (self.last_col + 1).saturating_sub(self.first_col)
    }

    /// Height of the clamped window.
    pub fn height(&self) -> u32 {
        (self.last_row + 1).saturating_sub(self.first_row)
    }
}

/// Crop a centered `new_width` x `new_height` window out of `frame`.
///
/// When the requested size equals the frame size the frame itself is
/// returned as `Cow::Borrowed`; call `into_owned()` before mutating it.
/// Otherwise the crop is an owned copy. Windows that run past the frame edge
/// are clamped, so the result can be smaller than requested.
pub fn image_window(frame: &Frame, new_width: u32, new_height: u32) -> Cow<'_, Frame> {
    if (new_width, new_height) == frame.dimensions() {
        return Cow::Borrowed(frame);
    }

    let rect = WindowRect::centered(frame.width, frame.height, new_width, new_height);
    Cow::Owned(frame.region(
        rect.first_col.saturating_sub(1),
        rect.first_row.saturating_sub(1),
        rect.width(),
        rect.height(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient(width: u32, height: u32) -> Frame {
        let mut frame = Frame::transparent(width, height);
        for y in 0..height {
            for x in 0..width {
                frame.set(
                    x,
                    y,
                    Color::rgba(x as f64 / width as f64, y as f64 / height as f64, 0.0, 1.0),
                );
            }
        }
        frame
    }

    #[test]
    fn test_native_size_borrows() {
        let frame = gradient(6, 4);
        let window = image_window(&frame, 6, 4);
        assert!(matches!(window, Cow::Borrowed(_)));
        assert_eq!(*window, frame);
    }

    #[test]
    fn test_centered_crop() {
        let frame = gradient(10, 10);
        let window = image_window(&frame, 4, 4);
        assert!(matches!(window, Cow::Owned(_)));
        assert_eq!(window.dimensions(), (4, 4));
        // center 5, origin 5 - 2 + 1 = 4 (1-indexed) => 0-based 3
        assert_eq!(window.get(0, 0), frame.get(3, 3));
        assert_eq!(window.get(3, 3), frame.get(6, 6));
    }

    #[test]
    fn test_odd_sizes() {
        assert_eq!(WindowRect::axis(9, 3), (4, 6));
        assert_eq!(WindowRect::axis(192, 128), (33, 160));
    }

    #[test]
    fn test_oversized_request_clamps() {
        let frame = gradient(8, 6);
        let window = image_window(&frame, 20, 4);
        // width clamps to the whole frame, height is centered
        assert_eq!(window.dimensions(), (8, 4));
        assert_eq!(window.get(0, 0), frame.get(0, 1));
    }

    #[test]
    fn test_one_axis_native() {
        let frame = gradient(8, 6);
        let window = image_window(&frame, 8, 2);
        assert_eq!(window.dimensions(), (8, 2));
        assert_eq!(window.get(0, 0), frame.get(0, 2));
    }

    #[test]
    fn test_mutating_owned_copy_leaves_source() {
        let frame = gradient(4, 4);
        let mut copy = image_window(&frame, 4, 4).into_owned();
        copy.set(0, 0, Color::TRANSPARENT);
        assert_ne!(copy.get(0, 0), frame.get(0, 0));
    }
}
