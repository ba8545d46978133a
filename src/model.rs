//! Data model for extracted lanes — format-agnostic.

use serde::Serialize;

/// A lane declaration together with the `desc` block directly above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    name: String,
    summary: String,
    /// 1-based line of the `lane :name` declaration
    line: usize,
}

impl Lane {
    pub fn new(name: impl Into<String>, summary: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description lines joined by `\n`, top to bottom. Empty when the lane
    /// has no `desc` lines directly above it.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_documented(&self) -> bool {
        !self.summary.is_empty()
    }
}

/// Lanes extracted from a single input.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    /// Path the lanes were read from; `None` for stdin
    pub source: Option<String>,
    pub lanes: Vec<Lane>,
}
