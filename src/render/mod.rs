//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod text;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;

    /// Render several documents into one stream, e.g. for stdout.
    fn render_all(&self, docs: &[Document]) -> Result<String> {
        let parts = docs
            .iter()
            .map(|doc| self.render(doc))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join("\n"))
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use text, markdown, or json",
            format
        )),
    }
}
