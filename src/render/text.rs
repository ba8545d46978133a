//! Plain-text renderer — the terminal listing.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct TextRenderer;

const INDENT: &str = "    ";

impl Renderer for TextRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();

        if let Some(ref source) = doc.source {
            out.push_str(&format!("# {}\n\n", source));
        }

        let blocks: Vec<String> = doc.lanes.iter().map(render_lane).collect();
        out.push_str(&blocks.join("\n"));
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

fn render_lane(lane: &Lane) -> String {
    let mut out = format!("{}\n", lane.name());
    if lane.is_documented() {
        for line in lane.summary().split('\n') {
            if !line.is_empty() {
                out.push_str(INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
    }
    out
}
