use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Structural retrieval strategies over a tree index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeRetrieverMode {
    /// Return the root answer nodes.
    #[default]
    #[serde(alias = "root")]
    RootNodes,
    /// Return every leaf node.
    AllLeaf,
}

impl TreeRetrieverMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RootNodes => "root_nodes",
            Self::AllLeaf => "all_leaf",
        }
    }
}

impl fmt::Display for TreeRetrieverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeRetrieverMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root_nodes" | "root" => Ok(Self::RootNodes),
            "all_leaf" => Ok(Self::AllLeaf),
            other => Err(ConfigError::UnknownRetrieverMode {
                value: other.to_string(),
            }),
        }
    }
}

/// What the sorted retrieval algorithm does when two nodes share an
/// ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Reject with `OrderingContractViolation`.
    #[default]
    Strict,
    /// Order colliding nodes by ascending id.
    TieBreakById,
}

impl OrderingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::TieBreakById => "tie_break_by_id",
        }
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "tie_break_by_id" => Ok(Self::TieBreakById),
            other => Err(ConfigError::UnknownOrderingPolicy {
                value: other.to_string(),
            }),
        }
    }
}
