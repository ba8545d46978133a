//! Parser module — dispatch by file name.

pub mod fastfile;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Whether `path` names something that holds fastlane lanes.
///
/// Accepts `Fastfile`, `Fastfile.<anything>` (e.g. `Fastfile.shared`) and
/// Ruby files imported from one.
pub fn is_fastfile(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name == "Fastfile"
        || name.starts_with("Fastfile.")
        || path.extension().and_then(|e| e.to_str()) == Some("rb")
}

/// Parse a source file into a Document.
pub fn parse_file(path: &Path, content: &str) -> Result<Document> {
    if !is_fastfile(path) {
        return Err(anyhow!("unsupported file type: {}", path.display()));
    }
    Ok(Document {
        source: Some(path.to_string_lossy().to_string()),
        lanes: fastfile::extract(content),
    })
}
