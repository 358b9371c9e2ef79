//! Spritesheets End-to-End Test Infrastructure
//!
//! This crate drives whole batch runs through real files:
//!
//! - Fixtures: synthetic render trees and manifests in temp directories
//! - Harness: decoding written sheets and locating frames inside them
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p spritesheets-tests
//! ```
//!
//! Every synthetic frame carries its index in the red channel of its
//! top-left pixel, so a test can read back which frame landed in which cell:
//!
//! ```rust,ignore
//! use spritesheets_tests::fixtures::RenderFixture;
//! use spritesheets_tests::harness::{cell_marker, read_sheet};
//!
//! let fixture = RenderFixture::new();
//! fixture.add_animation("Idle1", 12, 192, 192);
//! // ... pack ...
//! let sheet = read_sheet(&fixture.out_dir().join("Idle1_sheet.png"));
//! assert_eq!(cell_marker(&sheet, 192, 192, 6, 7), 7);
//! ```

pub mod fixtures;
pub mod harness;

pub use fixtures::RenderFixture;
pub use harness::{cell_marker, file_hash, read_sheet};
