// catalog.rs — Discovered script identifiers, grouped by manifest kind.

use serde::{Deserialize, Serialize};

/// Script identifiers discovered from a project's build manifests.
///
/// Each list is populated by exactly one detector and reflects only
/// successfully parsed manifests — a missing or malformed manifest leaves
/// its list empty without affecting the others. Order within a list follows
/// manifest declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptCatalog {
    /// Keys of the `scripts` object in `package.json`.
    pub npm_scripts: Vec<String>,

    /// Makefile targets, excluding `.`-prefixed special targets.
    pub make_targets: Vec<String>,

    /// `tool.poetry.scripts` keys followed by PEP 621 `project.scripts` keys.
    /// A name declared in both sections appears twice.
    pub poetry_scripts: Vec<String>,

    /// Mise tasks. Only populated from workspace security defaults.
    pub mise_tasks: Vec<String>,

    /// Shell script filenames found in the project root (non-recursive).
    pub shell_scripts: Vec<String>,
}

impl ScriptCatalog {
    /// True when no detector found anything.
    pub fn is_empty(&self) -> bool {
        self.npm_scripts.is_empty()
            && self.make_targets.is_empty()
            && self.poetry_scripts.is_empty()
            && self.mise_tasks.is_empty()
            && self.shell_scripts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_empty() {
        assert!(ScriptCatalog::default().is_empty());
    }

    #[test]
    fn any_entry_makes_catalog_non_empty() {
        let catalog = ScriptCatalog {
            mise_tasks: vec!["lint".to_string()],
            ..ScriptCatalog::default()
        };
        assert!(!catalog.is_empty());
    }
}
