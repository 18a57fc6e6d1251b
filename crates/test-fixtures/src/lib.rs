//! Test fixture loader for canopy golden retrieval scenarios.
//!
//! Fixtures live next to this crate under `golden/`. Each retrieval scenario
//! describes a tree, a query, the retriever/response mode pairing, and the
//! expected outcome.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// One node of a scenario tree.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNode {
    pub id: String,
    pub text: String,
    pub index: usize,
    /// Top-down parent. `None` makes the node a root.
    #[serde(default)]
    pub parent: Option<String>,
}

/// Input half of a retrieval scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalInput {
    pub nodes: Vec<FixtureNode>,
    /// Ids registered in the tree but never written to the docstore.
    #[serde(default)]
    pub graph_only: Vec<String>,
    pub query: String,
    pub retriever_mode: String,
    pub response_mode: String,
    #[serde(default)]
    pub ordering_policy: Option<String>,
}

/// Expected outcome: either an id sequence or a named error kind.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalExpected {
    #[serde(default)]
    pub ids: Option<Vec<String>>,
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    /// One of "not_found", "incompatible_response_mode", "ordering_violation".
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalScenario {
    pub description: String,
    pub input: RetrievalInput,
    pub expected: RetrievalExpected,
}
