// reader.rs — Filesystem-backed config reader.
//
// Every discovery input is an optional file under the project root. The
// reader hands back parsed JSON/TOML, raw text, or glob matches, and treats
// a missing file and an unparsable file the same way: no result. Callers
// branch on emptiness, never on an error value.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;

/// Reads optional config files under a project root.
///
/// All accessors are tolerant: absence, I/O failure, and parse failure all
/// collapse to `None` (or an empty list), with the cause logged at debug
/// level. An unreadable optional file must never block task execution.
pub struct ConfigReader {
    root: PathBuf,
}

impl ConfigReader {
    /// Create a reader rooted at the given project directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The project root this reader resolves names against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check whether a file exists directly under the root.
    pub fn file_exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    /// Read a file as raw text. `None` if absent or unreadable.
    pub fn read_text(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!("skipping {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Read and parse a JSON file. `None` if absent, unreadable, or malformed.
    pub fn read_json(&self, name: &str) -> Option<serde_json::Value> {
        match self.try_read_json(name) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("skipping {}: {}", self.root.join(name).display(), err);
                None
            }
        }
    }

    /// Read and parse a TOML file. `None` if absent, unreadable, or malformed.
    pub fn read_toml(&self, name: &str) -> Option<toml::Value> {
        match self.try_read_toml(name) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("skipping {}: {}", self.root.join(name).display(), err);
                None
            }
        }
    }

    /// List files directly under the root matching a glob pattern.
    ///
    /// Non-recursive: the pattern is applied to the root directory only.
    /// Results are sorted so repeated runs are byte-identical.
    pub fn glob_files(&self, pattern: &str) -> Vec<PathBuf> {
        let root = match self.root.to_str() {
            Some(root) => root,
            None => return Vec::new(),
        };
        // Escape the root so bracket characters in the path don't glob.
        let full = format!("{}/{}", glob::Pattern::escape(root), pattern);
        let entries = match glob::glob(&full) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(), // Invalid patterns match nothing (fail-closed)
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        files.sort();
        files
    }

    fn try_read_json(&self, name: &str) -> Result<serde_json::Value, DiscoveryError> {
        let path = self.root.join(name);
        let text = fs::read_to_string(&path).map_err(|source| DiscoveryError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn try_read_toml(&self, name: &str) -> Result<toml::Value, DiscoveryError> {
        let path = self.root.join(name);
        let text = fs::read_to_string(&path).map_err(|source| DiscoveryError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let reader = ConfigReader::new(dir.path());

        assert!(reader.read_text("nope.txt").is_none());
        assert!(reader.read_json("nope.json").is_none());
        assert!(reader.read_toml("nope.toml").is_none());
        assert!(!reader.file_exists("nope.txt"));
    }

    #[test]
    fn malformed_json_reads_as_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{\"scripts\": {").unwrap();

        let reader = ConfigReader::new(dir.path());
        assert!(reader.read_json("broken.json").is_none());
    }

    #[test]
    fn valid_json_parses() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pkg.json"), r#"{"name": "demo"}"#).unwrap();

        let reader = ConfigReader::new(dir.path());
        let value = reader.read_json("pkg.json").unwrap();
        assert_eq!(value["name"], "demo");
    }

    #[test]
    fn glob_is_root_only_and_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.sh"), "#!/bin/sh\n").unwrap();
        fs::write(dir.path().join("a.sh"), "#!/bin/sh\n").unwrap();
        fs::create_dir(dir.path().join("scripts")).unwrap();
        fs::write(dir.path().join("scripts").join("nested.sh"), "").unwrap();

        let reader = ConfigReader::new(dir.path());
        let names: Vec<_> = reader
            .glob_files("*.sh")
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.sh", "b.sh"]);
    }

    #[test]
    fn glob_matches_directories_are_excluded() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("dir.sh")).unwrap();

        let reader = ConfigReader::new(dir.path());
        assert!(reader.glob_files("*.sh").is_empty());
    }
}
