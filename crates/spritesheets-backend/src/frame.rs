//! In-memory frames.
//!
//! A [`Frame`] is a row-major grid of [`Color`] pixels. Rendered frames,
//! crops, blended frames and whole sheets all use this type.

use std::path::Path;

use image::RgbaImage;

use crate::color::Color;
use crate::error::{Result, SheetError};
use crate::png::{write_rgba, PngConfig};

/// A 2D RGBA pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl Frame {
    /// Create a new frame filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::TRANSPARENT)
    }

    /// Frame size as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Copy a rectangular region into a new frame.
    ///
    /// `x`, `y` are the 0-based top-left corner. The region must lie inside the frame.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Frame {
        debug_assert!(x + width <= self.width && y + height <= self.height);
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in y..y + height {
            let start = self.index(x, row);
            data.extend_from_slice(&self.data[start..start + width as usize]);
        }
        Frame {
            width,
            height,
            data,
        }
    }

    /// Copy `src` into this frame with its top-left corner at `(x, y)`.
    ///
    /// Pixels that would land outside this frame are dropped.
    pub fn blit(&mut self, src: &Frame, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_width = src.width.min(self.width - x) as usize;
        let copy_height = src.height.min(self.height - y);
        for row in 0..copy_height {
            let dst_start = self.index(x, y + row);
            let src_start = src.index(0, row);
            self.data[dst_start..dst_start + copy_width]
                .copy_from_slice(&src.data[src_start..src_start + copy_width]);
        }
    }

    /// Build a frame from an 8-bit RGBA image.
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image.pixels().map(|p| Color::from_rgba8(p.0)).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Load any image the codec understands and convert it to RGBA.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| SheetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_rgba_image(&image.to_rgba8()))
    }

    /// Write the frame as a deterministic RGBA PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        write_rgba(self, path, &PngConfig::default())?;
        Ok(())
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Frame {
        let mut frame = Frame::transparent(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (y * width + x) as f64 / (width * height) as f64;
                frame.set(x, y, Color::rgba(v, v, v, 1.0));
            }
        }
        frame
    }

    #[test]
    fn test_region_copies_rows() {
        let frame = numbered(4, 3);
        let region = frame.region(1, 1, 2, 2);
        assert_eq!(region.dimensions(), (2, 2));
        assert_eq!(region.get(0, 0), frame.get(1, 1));
        assert_eq!(region.get(1, 1), frame.get(2, 2));
    }

    #[test]
    fn test_blit_places_and_clips() {
        let src = numbered(3, 3);
        let mut dst = Frame::transparent(4, 4);
        dst.blit(&src, 2, 2);

        assert_eq!(dst.get(2, 2), src.get(0, 0));
        assert_eq!(dst.get(3, 3), src.get(1, 1));
        assert_eq!(dst.get(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_from_rgba_image() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(1, 0, image::Rgba([255, 0, 0, 255]));
        let frame = Frame::from_rgba_image(&image);
        assert_eq!(frame.get(0, 0), Color::TRANSPARENT);
        assert_eq!(frame.get(1, 0), Color::rgba(1.0, 0.0, 0.0, 1.0));
    }
}
