//! CLI command implementations

pub mod batch;
pub mod blend;
pub mod bounds;
pub mod json_output;
pub mod pack;
pub mod pack_eightway;
pub mod unused;
pub mod validate;

mod reporting;
