//! Temp-directory workspace fixtures
//!
//! [`TestWorkspace`] materializes a workspace on disk (root manifest,
//! package directories, tsconfig files) and produces the matching listing
//! in the two forms tests need: a [`FixtureLister`] for API-level tests and
//! a `--list-command`-compatible shell command for binary-level tests.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use tsref_fs::NormalizedPath;
use tsref_workspace::{Result, WorkspaceLister};

/// Lister that replays a canned listing instead of running a command.
#[derive(Debug, Clone)]
pub struct FixtureLister {
    stdout: String,
}

impl FixtureLister {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
        }
    }
}

#[async_trait]
impl WorkspaceLister for FixtureLister {
    async fn list(&self, _root: &NormalizedPath) -> Result<String> {
        Ok(self.stdout.clone())
    }
}

/// Builder for an on-disk workspace fixture.
pub struct TestWorkspace {
    temp: TempDir,
    entries: Vec<Value>,
}

impl TestWorkspace {
    /// Create an empty workspace with a root manifest declaring
    /// `workspaces`.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name": "fixture-root", "private": true, "workspaces": ["packages/*"]}"#,
        )
        .unwrap();
        Self {
            temp,
            entries: Vec::new(),
        }
    }

    /// Add a package at `packages/<name>`.
    ///
    /// `tsconfig` is written verbatim when given; `None` creates a package
    /// without a compiler configuration.
    pub fn package(mut self, name: &str, deps: &[&str], tsconfig: Option<&str>) -> Self {
        let location = format!("packages/{name}");
        let dir = self.temp.path().join(&location);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("package.json"),
            json!({ "name": name }).to_string(),
        )
        .unwrap();
        if let Some(content) = tsconfig {
            fs::write(dir.join("tsconfig.json"), content).unwrap();
        }

        self.entries.push(json!({
            "name": name,
            "location": location,
            "workspaceDependencies": deps,
        }));
        self
    }

    /// The workspace root.
    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp.path())
    }

    /// The workspace root as a native path.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// The NDJSON listing matching the packages added so far.
    pub fn listing(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    /// A lister replaying this workspace's listing.
    pub fn lister(&self) -> FixtureLister {
        FixtureLister::new(self.listing())
    }

    /// Write the listing into the workspace and return a shell command that
    /// replays it, suitable for the CLI's `--list-command` flag.
    pub fn listing_command(&self) -> String {
        fs::write(self.temp.path().join("listing.ndjson"), self.listing()).unwrap();
        "cat listing.ndjson".to_string()
    }

    /// Read a file relative to the workspace root.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.temp.path().join(rel)).unwrap()
    }

    /// Write a file relative to the workspace root.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.temp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Whether a file exists relative to the workspace root.
    pub fn exists(&self, rel: &str) -> bool {
        self.temp.path().join(rel).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
