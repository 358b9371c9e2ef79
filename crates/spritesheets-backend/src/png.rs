//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so that packing the same frames twice
//! produces byte-identical sheets.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::frame::Frame;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA frame to a PNG file.
pub fn write_rgba(frame: &Frame, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgba_to_writer(frame, writer, config)
}

/// Write an RGBA frame to any writer.
pub fn write_rgba_to_writer<W: Write>(
    frame: &Frame,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if frame.width == 0 || frame.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            frame.width, frame.height
        )));
    }

    let mut encoder = Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps, so identical pixels give identical bytes
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&frame.to_rgba8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    frame: &Frame,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(frame, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
