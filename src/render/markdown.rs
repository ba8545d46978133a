//! GitHub-flavored markdown renderer.
//!
//! Layout: optional title, an index of lanes, then one `###` section per lane.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        // Every heading takes part in GitHub's duplicate numbering
        let mut anchors = toc::Anchors::default();

        if let Some(ref source) = doc.source {
            output.push_str(&format!("# {}\n\n", source));
            anchors.claim(source);
        }

        if !doc.lanes.is_empty() {
            output.push_str("## Index\n\n");
            anchors.claim("Index");
            let lane_anchors: Vec<String> = doc.lanes.iter().map(|l| anchors.claim(l.name())).collect();
            for (lane, anchor) in doc.lanes.iter().zip(&lane_anchors) {
                output.push_str(&toc::render_toc_item(lane.name(), anchor));
                output.push('\n');
            }
            output.push('\n');
        }

        for lane in &doc.lanes {
            output.push_str(&render_lane(lane));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single lane's section.
fn render_lane(lane: &Lane) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", lane.name()));

    if lane.is_documented() {
        // Blank desc lines are paragraph breaks; keep the rest as hard line breaks
        lines.push(hard_breaks(lane.summary()));
    } else {
        lines.push("_No description._".to_string());
    }
    lines.push(String::new());

    lines.push(format!("_Defined on line {}._", lane.line()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Turn consecutive summary lines into markdown hard line breaks.
fn hard_breaks(summary: &str) -> String {
    let lines: Vec<&str> = summary.split('\n').collect();
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        if i + 1 < lines.len() {
            let next_blank = lines[i + 1].is_empty();
            if !line.is_empty() && !next_blank {
                out.push_str("  ");
            }
            out.push('\n');
        }
    }
    out
}
