//! Helpers for inspecting written sheets.

use std::fs;
use std::path::Path;

use image::RgbaImage;

/// Decode a written sheet.
pub fn read_sheet(path: &Path) -> RgbaImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to read sheet {}: {}", path.display(), e))
        .to_rgba8()
}

/// Frame marker stored in the top-left pixel of cell `k`.
pub fn cell_marker(
    sheet: &RgbaImage,
    cell_width: u32,
    cell_height: u32,
    columns: u32,
    k: u32,
) -> u8 {
    let x = (k % columns) * cell_width;
    let y = (k / columns) * cell_height;
    sheet.get_pixel(x, y).0[0]
}

/// BLAKE3 hash of a file's bytes.
pub fn file_hash(path: &Path) -> String {
    let data = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    blake3::hash(&data).to_hex().to_string()
}
