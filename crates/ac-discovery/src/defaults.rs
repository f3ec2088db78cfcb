// defaults.rs — Workspace security defaults.
//
// Operators of a multi-repo workspace can place pre-approved commands in
// `.auto-claude/security_defaults.json` so every repository resolved under
// that workspace starts from the same baseline. The file is optional and
// partially trusted: a missing, unreadable, or malformed file contributes
// nothing.
//
// Expected shape:
//
//   {
//     "custom_scripts": {
//       "make_targets": ["build", "test"],
//       "mise_tasks": ["lint"]
//     },
//     "validation_commands": {
//       "go": { "build": "go build ./...", "test": "go test ./..." }
//     }
//   }

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DiscoveryError;

/// Directory under the project root holding workspace-level state.
pub const WORKSPACE_DIR: &str = ".auto-claude";

/// Filename of the security defaults document inside [`WORKSPACE_DIR`].
pub const SECURITY_DEFAULTS_FILENAME: &str = "security_defaults.json";

/// Pre-approved commands shared across a workspace.
///
/// Inner validation command values stay as raw JSON so one non-string value
/// is skipped without rejecting the rest of the document. The category level
/// is typed: a category whose value is not an object makes the document
/// malformed, and the whole file is skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityDefaults {
    /// Extra script identifiers to merge into the catalog.
    #[serde(default)]
    pub custom_scripts: CustomScriptDefaults,

    /// Category → key → command string (e.g. "go" → "build" → "go build ./...").
    #[serde(default)]
    pub validation_commands: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

/// The `custom_scripts` section of the defaults document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomScriptDefaults {
    #[serde(default)]
    pub make_targets: Vec<String>,

    #[serde(default)]
    pub mise_tasks: Vec<String>,
}

impl SecurityDefaults {
    /// Load the defaults document for a project, if one exists.
    ///
    /// File-system errors and malformed JSON are treated identically to an
    /// absent file: `None`. A conservative (smaller) allowlist is the
    /// degraded outcome, never an error.
    pub fn load_for_project(project_dir: &Path) -> Option<Self> {
        let path = project_dir.join(WORKSPACE_DIR).join(SECURITY_DEFAULTS_FILENAME);
        match Self::read(&path) {
            Ok(defaults) => Some(defaults),
            Err(err) => {
                tracing::debug!("no security defaults at {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Base commands extracted from `validation_commands`.
    ///
    /// For every string value, the first whitespace-delimited token is the
    /// base command. Blank strings and non-string values are skipped.
    pub fn validation_base_commands(&self) -> Vec<String> {
        let mut commands = Vec::new();
        for category in self.validation_commands.values() {
            for value in category.values() {
                let cmd = match value.as_str() {
                    Some(cmd) => cmd,
                    None => continue,
                };
                if let Some(base) = cmd.split_whitespace().next() {
                    commands.push(base.to_string());
                }
            }
        }
        commands
    }

    fn read(path: &Path) -> Result<Self, DiscoveryError> {
        let text = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_defaults(dir: &Path, json: &str) {
        let ac_dir = dir.join(WORKSPACE_DIR);
        fs::create_dir_all(&ac_dir).unwrap();
        fs::write(ac_dir.join(SECURITY_DEFAULTS_FILENAME), json).unwrap();
    }

    #[test]
    fn absent_file_loads_as_none() {
        let dir = tempdir().unwrap();
        assert!(SecurityDefaults::load_for_project(dir.path()).is_none());
    }

    #[test]
    fn truncated_json_loads_as_none() {
        let dir = tempdir().unwrap();
        write_defaults(dir.path(), r#"{"custom_scripts": {"make_targets": ["bu"#);
        assert!(SecurityDefaults::load_for_project(dir.path()).is_none());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dir = tempdir().unwrap();
        write_defaults(dir.path(), "{}");

        let defaults = SecurityDefaults::load_for_project(dir.path()).unwrap();
        assert!(defaults.custom_scripts.make_targets.is_empty());
        assert!(defaults.custom_scripts.mise_tasks.is_empty());
        assert!(defaults.validation_base_commands().is_empty());
    }

    #[test]
    fn base_command_is_first_token() {
        let dir = tempdir().unwrap();
        write_defaults(
            dir.path(),
            r#"{
                "validation_commands": {
                    "go": {"build": "go build ./...", "test": "go test ./..."},
                    "python": {"lint": "ruff check ."}
                }
            }"#,
        );

        let defaults = SecurityDefaults::load_for_project(dir.path()).unwrap();
        let mut commands = defaults.validation_base_commands();
        commands.sort();
        commands.dedup();
        assert_eq!(commands, vec!["go", "ruff"]);
    }

    #[test]
    fn non_string_and_blank_commands_are_skipped() {
        let dir = tempdir().unwrap();
        write_defaults(
            dir.path(),
            r#"{
                "validation_commands": {
                    "misc": {
                        "ok": "cargo check",
                        "blank": "   ",
                        "number": 42,
                        "nested": {"deep": "never traversed"}
                    }
                }
            }"#,
        );

        let defaults = SecurityDefaults::load_for_project(dir.path()).unwrap();
        assert_eq!(defaults.validation_base_commands(), vec!["cargo"]);
    }
}
