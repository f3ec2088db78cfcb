// multi_repo.rs — Multi-repo workspace graph.
//
// Loaded from `.auto-claude/repo_mapping.json` at workspace startup and
// never mutated afterwards, so one instance can back any number of
// concurrent per-repository resolutions behind an `Arc`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// Relative path of the repo mapping document under the workspace root.
pub const REPO_MAPPING_PATH: &str = ".auto-claude/repo_mapping.json";

/// A named cross-repo pattern — a flow that spans several repositories
/// (e.g. an auth flow touching both the core library and the web frontend).
///
/// Only the `repos` list is interpreted; everything else in the pattern
/// record is carried through untouched for the planner to surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrossRepoPattern {
    /// Repositories this pattern spans.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Free-form pattern metadata (description, entry points, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Context for multi-repository workspaces.
///
/// Answers the two questions task planning needs: which repositories depend
/// on the one a task modifies, and which declared cross-repo flows that
/// repository participates in. Both queries are pure scans over the loaded
/// mapping — no caching, no mutation, safe to call concurrently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiRepoContext {
    /// Absolute path of the workspace root.
    #[serde(default)]
    pub workspace_root: String,

    /// Repo name → opaque metadata record (path, language, owners, ...).
    #[serde(default)]
    pub repos: BTreeMap<String, serde_json::Value>,

    /// Repo name → repos it depends on.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,

    /// Pattern name → cross-repo pattern record.
    #[serde(default)]
    pub cross_repo_patterns: BTreeMap<String, CrossRepoPattern>,

    /// Repo name → worktree strategy for task isolation.
    #[serde(default)]
    pub worktree_strategy: BTreeMap<String, String>,
}

impl MultiRepoContext {
    /// Load the workspace repo mapping, if one exists.
    ///
    /// Same posture as the other optional workspace files: absent,
    /// unreadable, and malformed all collapse to `None`. A workspace
    /// without a mapping is simply single-repo.
    pub fn load(workspace_root: &Path) -> Option<Self> {
        let path = workspace_root.join(REPO_MAPPING_PATH);
        match Self::read(&path) {
            Ok(context) => Some(context),
            Err(err) => {
                tracing::debug!("no repo mapping at {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Repos that depend on the given repo.
    pub fn dependent_repos(&self, repo_name: &str) -> Vec<String> {
        self.dependencies
            .iter()
            .filter(|(_, deps)| deps.iter().any(|dep| dep == repo_name))
            .map(|(repo, _)| repo.clone())
            .collect()
    }

    /// Cross-repo patterns that involve the given repo, as
    /// (pattern name, pattern record) pairs.
    pub fn cross_repo_impact(&self, repo_name: &str) -> Vec<(&str, &CrossRepoPattern)> {
        self.cross_repo_patterns
            .iter()
            .filter(|(_, pattern)| pattern.repos.iter().any(|repo| repo == repo_name))
            .map(|(name, pattern)| (name.as_str(), pattern))
            .collect()
    }

    fn read(path: &Path) -> Result<Self, ContextError> {
        let text = fs::read_to_string(path).map_err(|source| ContextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
