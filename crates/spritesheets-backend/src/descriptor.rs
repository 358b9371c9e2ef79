//! Animation descriptor emission.
//!
//! Writes a Godot `SpriteFrames` text resource listing every animation with
//! its loop flag and speed. Frame lists are left empty; they are filled in
//! from the sheets inside the engine.

use std::path::Path;

use spritesheets_spec::{AnimationEntry, EIGHT_WAY_DIRECTIONS};
use tracing::info;

use crate::error::{Result, SheetError};

/// Animation names emitted for one entry.
///
/// Eight-way entries expand to `<name>_0` through `<name>_7`.
pub fn animation_names(entry: &AnimationEntry, lowercase: bool) -> Vec<String> {
    let base = if lowercase {
        entry.name.to_lowercase()
    } else {
        entry.name.clone()
    };
    if entry.eight_way {
        (0..EIGHT_WAY_DIRECTIONS)
            .map(|direction| format!("{}_{}", base, direction))
            .collect()
    } else {
        vec![base]
    }
}

/// Render the descriptor text.
pub fn render(entries: &[AnimationEntry], lowercase: bool) -> String {
    let mut out = String::new();
    out.push_str("[gd_resource type=\"SpriteFrames\" format=3]\n\n");

    for entry in entries {
        out.push_str(&format!(
            "; {}: {} frames{}\n",
            entry.name,
            entry.frame_count,
            if entry.eight_way { " per direction, 8 directions" } else { "" }
        ));
    }
    if !entries.is_empty() {
        out.push('\n');
    }

    out.push_str("[resource]\nanimations = [");
    let mut first = true;
    for entry in entries {
        for name in animation_names(entry, lowercase) {
            if !first {
                out.push_str(", ");
            }
            first = false;
            out.push_str(&format!(
                "{{\n\"frames\": [],\n\"loop\": {},\n\"name\": &\"{}\",\n\"speed\": {:?}\n}}",
                entry.looping, name, entry.speed
            ));
        }
    }
    out.push_str("]\n");
    out
}

/// Render and write the descriptor, creating parent directories.
pub fn write(path: &Path, entries: &[AnimationEntry], lowercase: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SheetError::io(parent, e))?;
    }
    std::fs::write(path, render(entries, lowercase)).map_err(|e| SheetError::io(path, e))?;
    info!(descriptor = %path.display(), animations = entries.len(), "wrote descriptor");
    Ok(())
}
