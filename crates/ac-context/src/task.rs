// task.rs — Per-task context aggregate.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::multi_repo::MultiRepoContext;

/// A file the planner selected for a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileMatch {
    /// Path relative to the repository root.
    pub path: String,

    /// Service the file belongs to.
    pub service: String,

    /// Why this file was selected (e.g. "declares the session model").
    pub reason: String,

    /// Ranking score from the selection pass.
    #[serde(default)]
    pub relevance_score: f64,

    /// (line number, line text) pairs that drove the match.
    #[serde(default)]
    pub matching_lines: Vec<(u64, String)>,
}

/// Complete context for one task.
///
/// Built once by the planner and read-only afterwards. The workspace graph
/// is shared, not copied: every task scoped to the same workspace holds an
/// `Arc` to the one loaded [`MultiRepoContext`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskContext {
    /// What the task is asking for, in the operator's words.
    pub task_description: String,

    /// Services the task is scoped to.
    pub scoped_services: Vec<String>,

    /// Files the task is expected to change.
    pub files_to_modify: Vec<FileMatch>,

    /// Files relevant for reference but not expected to change.
    pub files_to_reference: Vec<FileMatch>,

    /// Pattern name → where the pattern was observed.
    pub patterns_discovered: BTreeMap<String, String>,

    /// Service name → opaque per-service context record.
    pub service_contexts: BTreeMap<String, serde_json::Value>,

    /// Historical hints from the knowledge graph.
    #[serde(default)]
    pub graph_hints: Vec<serde_json::Value>,

    /// Workspace graph, present only in multi-repo workspaces. Not
    /// serialized; the loader rebinds it to the live workspace context.
    #[serde(skip)]
    pub multi_repo_context: Option<Arc<MultiRepoContext>>,
}
