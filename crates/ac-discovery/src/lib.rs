//! # ac-discovery
//!
//! Command-surface discovery and allowlist resolution for Auto Claude.
//!
//! Before an agent is handed a shell, we need to know which commands it may
//! legitimately run in a given project. The [`CommandSurfaceResolver`] answers
//! that by combining three sources: scripts mechanically discovered from
//! build manifests (`package.json`, `Makefile`, `pyproject.toml`, root shell
//! scripts), the operator-authored `.auto-claude-allowlist` file, and
//! workspace-wide defaults from `.auto-claude/security_defaults.json`.
//! The output feeds the execution sandbox as its allowlist gate.
//!
//! ## Key invariants
//!
//! - **Best effort**: every source is optional. A missing or malformed file
//!   contributes nothing; it never aborts resolution or its sibling sources.
//! - **Monotone merge**: later sources only add to the surface, never remove.
//!   A degraded run yields a smaller (more conservative) allowlist, not an
//!   error.
//! - **Identity only**: the resolver decides which base commands and scripts
//!   exist, not which arguments are safe. Argument policy lives in the
//!   sandbox.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod reader;
pub mod resolver;

pub use catalog::ScriptCatalog;
pub use defaults::{CustomScriptDefaults, SecurityDefaults};
pub use error::DiscoveryError;
pub use reader::ConfigReader;
pub use resolver::{CommandSurface, CommandSurfaceResolver};
