//! # ac-context
//!
//! Task context and multi-repo workspace awareness for Auto Claude.
//!
//! A task is planned against one repository, but a workspace may hold many.
//! [`MultiRepoContext`] is the declared dependency and pattern graph over
//! the workspace's repositories, loaded once from
//! `.auto-claude/repo_mapping.json` and shared read-only by every task
//! scoped to that workspace. [`TaskContext`] bundles everything the planner
//! hands to an agent for one task: the description, the files in play, the
//! discovered patterns, and (when present) the workspace graph.
//!
//! ## Key components
//!
//! - [`MultiRepoContext`] — repos, dependencies, cross-repo patterns, and
//!   worktree strategy, with pure queries for "who depends on X" and
//!   "which patterns touch X".
//! - [`TaskContext`] — immutable-after-construction task aggregate.
//! - [`FileMatch`] — one file the planner selected, with the reason it
//!   matched.

pub mod error;
pub mod multi_repo;
pub mod task;

pub use error::ContextError;
pub use multi_repo::{CrossRepoPattern, MultiRepoContext};
pub use task::{FileMatch, TaskContext};
