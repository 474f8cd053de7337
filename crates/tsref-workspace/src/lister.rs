//! Workspace listing command invocation
//!
//! The package manager is the source of truth for the dependency graph. Its
//! listing command emits one JSON object per line on stdout; each line
//! becomes a [`PackageInfo`]. The command runs exactly once per run, with no
//! retries: transient failures surface directly to the caller.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use tsref_fs::NormalizedPath;

use crate::package::PackageInfo;
use crate::{Error, Result};

/// Default listing invocation (Yarn with workspaces enabled).
const DEFAULT_COMMAND: &[&str] = &["yarn", "workspaces", "list", "--json", "--verbose"];

/// Source of the raw workspace listing.
///
/// The engine only depends on this trait; production uses [`YarnLister`]
/// while tests substitute a fixture implementation.
#[async_trait]
pub trait WorkspaceLister: Send + Sync {
    /// Run the listing command in `root` and return its raw stdout.
    async fn list(&self, root: &NormalizedPath) -> Result<String>;
}

/// Lister backed by the real workspace manager.
///
/// Runs the default Yarn invocation, or an arbitrary override command
/// (through `sh -c`) for other managers and for tests.
#[derive(Debug, Clone, Default)]
pub struct YarnLister {
    override_command: Option<String>,
}

impl YarnLister {
    /// Lister using the default Yarn invocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lister running `command` through `sh -c` instead of Yarn.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            override_command: Some(command.into()),
        }
    }

    fn describe(&self) -> String {
        match &self.override_command {
            Some(cmd) => cmd.clone(),
            None => DEFAULT_COMMAND.join(" "),
        }
    }
}

#[async_trait]
impl WorkspaceLister for YarnLister {
    async fn list(&self, root: &NormalizedPath) -> Result<String> {
        let mut command = match &self.override_command {
            Some(cmd) => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(cmd);
                c
            }
            None => {
                let mut c = Command::new(DEFAULT_COMMAND[0]);
                c.args(&DEFAULT_COMMAND[1..]);
                c
            }
        };

        tracing::debug!(command = %self.describe(), root = %root, "running workspace listing");

        let output = command
            .current_dir(root.to_native())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::ListingSpawn {
                command: self.describe(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::ListingCommandFailed {
                command: self.describe(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse the listing output: one JSON object per non-empty line.
///
/// # Errors
///
/// Any line that is not valid JSON fails the whole parse.
pub fn parse_listing(stdout: &str) -> Result<Vec<PackageInfo>> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| Error::ListingParse {
                line: line.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
