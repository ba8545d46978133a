//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly, so editors and scripts get
//! `{"source": ..., "lanes": [{"name", "summary", "line"}]}`. Several
//! documents on one stream become a single array of those objects.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc).context("failed to serialize lanes")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn render_all(&self, docs: &[Document]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(docs).context("failed to serialize lanes")?;
        out.push('\n');
        Ok(out)
    }
}
