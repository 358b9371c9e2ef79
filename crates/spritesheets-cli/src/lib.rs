//! Spritesheets CLI library.
//!
//! This crate provides the command implementations behind the `spritesheets`
//! binary, so they can be driven directly from tests.

pub mod commands;
