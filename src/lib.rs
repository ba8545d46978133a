//! lanedoc — list fastlane lanes and their `desc` annotations.
//!
//! The extractor lives in [`parser::fastfile`]; everything else is plumbing
//! for the `lanedoc` binary (file discovery, rendering).

pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use model::{Document, Lane};
pub use parser::fastfile::extract;
