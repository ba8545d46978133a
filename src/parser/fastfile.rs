//! Fastfile lane extractor.
//!
//! Finds `lane :name` declarations and attaches the run of `desc "..."` lines
//! sitting directly above each one. Anything else between a `desc` block and
//! its lane (a blank line, `platform :ios`, a comment) cuts the block off.

use crate::model::Lane;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_LANE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*lane :([A-Za-z_]+)").unwrap());

// Same delimiter on both ends. An escaped delimiter inside the string makes
// the whole line fail to match.
static RE_DESC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*desc (?:"((?:[^"\\]|\\[^"])*)"|'((?:[^'\\]|\\[^'])*)')"#).unwrap()
});

// -- Public API ---------------------------------------------------------------

/// Extract every lane in `input`, in declaration order.
pub fn extract(input: &str) -> Vec<Lane> {
    let lines: Vec<&str> = input.lines().collect();

    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| match_lane_declaration(line).map(|name| (index, name)))
        .map(|(index, name)| Lane::new(name, collect_summary(&lines[..index]), index + 1))
        .collect()
}

/// Lane name declared on `line`, if it is a `lane :name` line.
pub fn match_lane_declaration(line: &str) -> Option<&str> {
    RE_LANE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text between the quotes of a `desc "..."` / `desc '...'` line.
pub fn match_description(line: &str) -> Option<&str> {
    let caps = RE_DESC.captures(line)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

// -- Helper functions ---------------------------------------------------------

/// Walk `preceding` bottom-up while lines are descriptions, then restore
/// source order and join.
fn collect_summary(preceding: &[&str]) -> String {
    let mut block: Vec<&str> = preceding
        .iter()
        .rev()
        .map_while(|line| match_description(line))
        .collect();
    block.reverse();
    block.join("\n")
}
