// resolver.rs — Command-surface resolution engine.
//
// The resolver is the single place that decides which shell commands an
// agent may be offered for a project. Every resolution runs the same ordered
// steps over an owned accumulator:
//
// 1. package.json `scripts` keys → npm-family launchers
// 2. Makefile targets → `make`
// 3. pyproject.toml poetry / PEP 621 script keys
// 4. root-level shell scripts → `./<name>`
// 5. operator allowlist (.auto-claude-allowlist) → custom commands
// 6. workspace security defaults → extra targets, tasks, base commands
//
// Later steps only ever add to earlier results. Every step is best-effort:
// a missing or malformed input contributes nothing and never aborts the
// remaining steps.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ScriptCatalog;
use crate::defaults::SecurityDefaults;
use crate::reader::ConfigReader;

/// Filename of the operator-authored allowlist in the project root.
pub const CUSTOM_ALLOWLIST_FILENAME: &str = ".auto-claude-allowlist";

/// Launchers that can all run package.json scripts. Added together whenever
/// any npm script exists — which launcher is installed is the sandbox's
/// problem, not ours.
const NPM_LAUNCHERS: &[&str] = &["npm", "yarn", "pnpm", "bun"];

/// The resolved command surface for one project directory.
///
/// `script_commands` holds launcher tokens (`npm`, `make`, `./deploy.sh`);
/// `custom_commands` holds base-command tokens the operator or workspace
/// explicitly trusts. The execution sandbox rejects any command whose
/// launcher or base token is in neither set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandSurface {
    /// Discovered script identifiers, by manifest kind.
    pub catalog: ScriptCatalog,

    /// Launcher tokens for running discovered scripts.
    pub script_commands: HashSet<String>,

    /// Explicitly trusted base commands.
    pub custom_commands: HashSet<String>,
}

/// Resolves the command surface for a single project directory.
///
/// Each resolution owns its accumulator, so concurrent resolutions over
/// different repositories share no mutable state.
pub struct CommandSurfaceResolver {
    reader: ConfigReader,
}

impl CommandSurfaceResolver {
    /// Create a resolver for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            reader: ConfigReader::new(project_dir),
        }
    }

    /// Run all detectors and merges, returning the resolved surface.
    ///
    /// Never fails: a degraded run returns a smaller surface, not an error.
    /// Re-running on an unchanged directory yields identical output.
    pub fn resolve(&self) -> CommandSurface {
        let mut surface = CommandSurface::default();

        self.detect_npm_scripts(&mut surface);
        self.detect_makefile_targets(&mut surface);
        self.detect_poetry_scripts(&mut surface);
        self.detect_shell_scripts(&mut surface);
        self.load_custom_allowlist(&mut surface);
        self.merge_security_defaults(&mut surface);

        tracing::debug!(
            "resolved command surface for {}: {} script commands, {} custom commands",
            self.reader.root().display(),
            surface.script_commands.len(),
            surface.custom_commands.len()
        );
        surface
    }

    /// Step 1: package.json `scripts` keys.
    fn detect_npm_scripts(&self, surface: &mut CommandSurface) {
        let pkg = match self.reader.read_json("package.json") {
            Some(pkg) => pkg,
            None => return,
        };
        let scripts = match pkg.get("scripts").and_then(serde_json::Value::as_object) {
            Some(scripts) => scripts,
            None => return,
        };

        surface.catalog.npm_scripts = scripts.keys().cloned().collect();

        if !surface.catalog.npm_scripts.is_empty() {
            for launcher in NPM_LAUNCHERS {
                surface.script_commands.insert((*launcher).to_string());
            }
        }
    }

    /// Step 2: Makefile targets.
    ///
    /// A target line is an identifier at line start immediately followed by
    /// a colon (optionally preceded by whitespace before the colon). Recipe
    /// lines are tab-indented and never match.
    fn detect_makefile_targets(&self, surface: &mut CommandSurface) {
        let content = match self.reader.read_text("Makefile") {
            Some(content) => content,
            None => return,
        };
        let target_re = match regex::Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)\s*:") {
            Ok(re) => re,
            Err(_) => return,
        };

        for line in content.lines() {
            if let Some(caps) = target_re.captures(line) {
                let target = &caps[1];
                // Skip reserved/special targets.
                if !target.starts_with('.') {
                    surface.catalog.make_targets.push(target.to_string());
                }
            }
        }

        if !surface.catalog.make_targets.is_empty() {
            surface.script_commands.insert("make".to_string());
        }
    }

    /// Step 3: pyproject.toml script entry points.
    ///
    /// `tool.poetry.scripts` keys first, then PEP 621 `project.scripts`
    /// keys. A name declared in both sections is recorded twice.
    fn detect_poetry_scripts(&self, surface: &mut CommandSurface) {
        let doc = match self.reader.read_toml("pyproject.toml") {
            Some(doc) => doc,
            None => return,
        };

        if let Some(scripts) = doc
            .get("tool")
            .and_then(|tool| tool.get("poetry"))
            .and_then(|poetry| poetry.get("scripts"))
            .and_then(toml::Value::as_table)
        {
            surface.catalog.poetry_scripts.extend(scripts.keys().cloned());
        }

        if let Some(scripts) = doc
            .get("project")
            .and_then(|project| project.get("scripts"))
            .and_then(toml::Value::as_table)
        {
            surface.catalog.poetry_scripts.extend(scripts.keys().cloned());
        }
    }

    /// Step 4: shell scripts in the project root.
    fn detect_shell_scripts(&self, surface: &mut CommandSurface) {
        for pattern in ["*.sh", "*.bash"] {
            for path in self.reader.glob_files(pattern) {
                let name = match path.file_name().and_then(|name| name.to_str()) {
                    Some(name) => name,
                    None => continue,
                };
                surface.catalog.shell_scripts.push(name.to_string());
                surface.script_commands.insert(format!("./{}", name));
            }
        }
    }

    /// Step 5: operator allowlist.
    ///
    /// Line-oriented, `#` starts a comment. Lines are trusted verbatim —
    /// this file is operator-authored input.
    fn load_custom_allowlist(&self, surface: &mut CommandSurface) {
        let content = match self.reader.read_text(CUSTOM_ALLOWLIST_FILENAME) {
            Some(content) => content,
            None => return,
        };

        for line in content.lines() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                surface.custom_commands.insert(line.to_string());
            }
        }
    }

    /// Step 6: workspace security defaults.
    ///
    /// Adds to, never removes from, what the detectors found.
    fn merge_security_defaults(&self, surface: &mut CommandSurface) {
        let defaults = match SecurityDefaults::load_for_project(self.reader.root()) {
            Some(defaults) => defaults,
            None => return,
        };

        for target in &defaults.custom_scripts.make_targets {
            if !surface.catalog.make_targets.contains(target) {
                surface.catalog.make_targets.push(target.clone());
            }
        }
        if !defaults.custom_scripts.make_targets.is_empty() {
            surface.script_commands.insert("make".to_string());
        }

        for task in &defaults.custom_scripts.mise_tasks {
            if !surface.catalog.mise_tasks.contains(task) {
                surface.catalog.mise_tasks.push(task.clone());
            }
        }
        if !defaults.custom_scripts.mise_tasks.is_empty() {
            surface.script_commands.insert("mise".to_string());
        }

        for base in defaults.validation_base_commands() {
            surface.custom_commands.insert(base);
        }
    }
}
