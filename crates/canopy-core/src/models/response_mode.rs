use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Response synthesis strategies.
///
/// Each retrieval strategy is compatible with a subset of these; the
/// structural tree retrievers each accept exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Iteratively refine an answer over each chunk.
    #[default]
    #[serde(alias = "default")]
    Refine,
    /// Pack chunks into as few prompts as possible, then refine.
    Compact,
    /// Concatenate all chunks into one prompt.
    SimpleSummarize,
    /// Summarize chunks bottom-up into a tree.
    TreeSummarize,
    /// Ignore context, answer from the model alone.
    Generation,
    /// Return retrieved nodes without synthesis.
    NoText,
}

impl ResponseMode {
    pub const COUNT: usize = 6;

    pub const ALL: [ResponseMode; 6] = [
        Self::Refine,
        Self::Compact,
        Self::SimpleSummarize,
        Self::TreeSummarize,
        Self::Generation,
        Self::NoText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refine => "refine",
            Self::Compact => "compact",
            Self::SimpleSummarize => "simple_summarize",
            Self::TreeSummarize => "tree_summarize",
            Self::Generation => "generation",
            Self::NoText => "no_text",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Self::Refine);
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownResponseMode {
                value: s.to_string(),
            })
    }
}
