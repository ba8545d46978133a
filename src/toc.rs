//! GitHub-flavored markdown anchors for lane headings.
//!
//! GitHub lowercases the heading, drops everything outside `[\w\- ]`, turns
//! spaces into hyphens and suffixes repeats with `-1`, `-2`, ... so two
//! `### beta` headings (one per platform) get `#beta` and `#beta-1`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_NON_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\- ]").unwrap());

/// Anchor slug for a single heading, ignoring duplicates.
pub fn github_slug(text: &str) -> String {
    RE_NON_ANCHOR
        .replace_all(&text.to_lowercase(), "")
        .replace(' ', "-")
}

/// Hands out anchors for the headings of one document, in order.
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    /// Anchor for the next heading titled `text`.
    pub fn claim(&mut self, text: &str) -> String {
        let slug = github_slug(text);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let anchor = match *count {
            0 => slug,
            n => format!("{}-{}", slug, n),
        };
        *count += 1;
        anchor
    }
}

/// Generate a TOC list item pointing at `anchor`.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_keeps_underscores() {
        assert_eq!(github_slug("deploy_daily"), "deploy_daily");
    }

    #[test]
    fn slug_lowercases() {
        assert_eq!(github_slug("Beta"), "beta");
    }

    #[test]
    fn slug_spaces_to_hyphens_and_punctuation_dropped() {
        assert_eq!(github_slug("ios/fastlane/Fastfile.rb"), "iosfastlanefastfilerb");
        assert_eq!(github_slug("Release notes"), "release-notes");
    }

    #[test]
    fn repeated_headings_get_suffixes() {
        let mut anchors = Anchors::default();
        assert_eq!(anchors.claim("beta"), "beta");
        assert_eq!(anchors.claim("test"), "test");
        assert_eq!(anchors.claim("beta"), "beta-1");
        assert_eq!(anchors.claim("Beta"), "beta-2");
    }

    #[test]
    fn toc_item_format() {
        assert_eq!(render_toc_item("deploy_daily", "deploy_daily"), "* [deploy_daily](#deploy_daily)");
    }
}
