//! Property-based tests for lane extraction
//!
//! Fastfiles are generated from a small line vocabulary (lane declarations,
//! desc lines, and unrelated Ruby) so the expected lanes can be computed
//! directly from the generated structure.

use lanedoc::parser::fastfile::{extract, match_description, match_lane_declaration};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Line {
    Lane(String),
    Desc(String),
    Other(String),
}

impl Line {
    fn render(&self) -> String {
        match self {
            Line::Lane(name) => format!("  lane :{} do", name),
            Line::Desc(text) => format!("  desc \"{}\"", text),
            Line::Other(text) => text.clone(),
        }
    }
}

fn lane_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z_]{0,12}"
}

/// Desc text without quotes or backslashes
fn desc_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:`-]{0,24}"
}

/// Ruby lines that are neither lanes nor descs
fn other_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("end".to_string()),
        Just("platform :ios do".to_string()),
        Just("  # desc \"commented out\"".to_string()),
        Just("  private_lane :helper do".to_string()),
        "    [a-z]{1,8}\\([a-z: \"]{0,12}\\)",
    ]
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        lane_name_strategy().prop_map(Line::Lane),
        desc_text_strategy().prop_map(Line::Desc),
        other_line_strategy().prop_map(Line::Other),
    ]
}

fn fastfile_strategy() -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(line_strategy(), 0..40)
}

fn join(lines: &[Line]) -> String {
    lines.iter().map(Line::render).collect::<Vec<_>>().join("\n")
}

/// Expected (name, summary) pairs computed from the line structure.
fn expected_lanes(lines: &[Line]) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if let Line::Lane(name) = line {
            let mut start = i;
            while start > 0 && matches!(lines[start - 1], Line::Desc(_)) {
                start -= 1;
            }
            let summary: Vec<&str> = lines[start..i]
                .iter()
                .filter_map(|l| match l {
                    Line::Desc(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            out.push((name.clone(), summary.join("\n")));
        }
    }
    out
}

proptest! {
    #[test]
    fn lanes_match_structure(lines in fastfile_strategy()) {
        let lanes = extract(&join(&lines));
        let actual: Vec<(String, String)> = lanes
            .iter()
            .map(|l| (l.name().to_string(), l.summary().to_string()))
            .collect();
        prop_assert_eq!(actual, expected_lanes(&lines));
    }

    #[test]
    fn count_equals_declaration_lines(lines in fastfile_strategy()) {
        let input = join(&lines);
        let declarations = input
            .lines()
            .filter(|l| match_lane_declaration(l).is_some())
            .count();
        prop_assert_eq!(extract(&input).len(), declarations);
    }

    #[test]
    fn lines_point_at_declarations(lines in fastfile_strategy()) {
        let input = join(&lines);
        let source: Vec<&str> = input.lines().collect();
        for lane in extract(&input) {
            prop_assert_eq!(match_lane_declaration(source[lane.line() - 1]), Some(lane.name()));
        }
    }

    #[test]
    fn non_desc_above_means_empty_summary(lines in fastfile_strategy()) {
        let input = join(&lines);
        let source: Vec<&str> = input.lines().collect();
        for lane in extract(&input) {
            let index = lane.line() - 1;
            if index == 0 || match_description(source[index - 1]).is_none() {
                prop_assert_eq!(lane.summary(), "");
            }
        }
    }

    #[test]
    fn extraction_is_idempotent(input in ".{0,400}") {
        prop_assert_eq!(extract(&input), extract(&input));
    }

    #[test]
    fn crlf_matches_lf(lines in fastfile_strategy()) {
        let lf = join(&lines);
        let crlf = lf.replace('\n', "\r\n");
        prop_assert_eq!(extract(&lf), extract(&crlf));
    }

    #[test]
    fn arbitrary_text_never_panics(input in "(?s).{0,600}") {
        let _ = extract(&input);
    }
}
