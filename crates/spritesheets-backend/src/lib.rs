//! Spritesheets Assembly Backend
//!
//! This crate turns directories of rendered animation frames into packed
//! spritesheets for 2D game engines.
//!
//! # Features
//!
//! - **Frame sequences**: explicit, validated frame order per animation
//! - **Cleanup**: clears near-transparent background left by the renderer
//! - **Cropping**: centered fixed-size windows applied to every frame
//! - **Bounding**: per-frame and per-animation content boxes
//! - **Packing**: row-major grid sheets bounded by a maximum width
//! - **Splitting**: multi-direction animations across height-bounded sheets
//! - **Blending**: linear cross-fades between two animations
//! - **Deterministic PNG**: fixed encoder settings for byte-identical sheets
//!
//! # Example
//!
//! ```no_run
//! use spritesheets_backend::{make_sheet, FrameSequence, SheetOptions};
//! use std::path::Path;
//!
//! let frames = FrameSequence::from_dir(Path::new("renders/squirrel/Idle1")).unwrap();
//! let options = SheetOptions {
//!     max_width: 1152,
//!     window: Some((192, 192)),
//!     lowercase: true,
//!     ..SheetOptions::default()
//! };
//! let sheet = make_sheet("Idle1", &frames, Path::new("sheets"), &options).unwrap();
//! println!("{} columns per row", sheet.layout.columns);
//! ```

pub mod blend;
pub mod bounds;
pub mod cleanup;
pub mod color;
pub mod descriptor;
pub mod eightway;
pub mod error;
pub mod frame;
pub mod png;
pub mod sequence;
pub mod sheet;
pub mod unused;
pub mod window;

// Re-export main types for convenience
pub use blend::{blend_animations, BlendOptions, BlendWeight};
pub use bounds::{find_animation_bounds, get_all_boxes, get_box, AnimationBoxes, BoundingBox};
pub use cleanup::{remove_floor, FLOOR_EPSILON};
pub use color::Color;
pub use eightway::{make_eightway_sheets, EightWayOptions, EightWayPlan};
pub use error::{Result, SheetError};
pub use frame::Frame;
pub use crate::png::{PngConfig, PngError};
pub use sequence::FrameSequence;
pub use sheet::{make_sheet, SheetLayout, SheetOptions, SheetOutput};
pub use unused::unused_frames;
pub use window::{image_window, WindowRect};
