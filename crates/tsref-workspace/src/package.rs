//! Workspace and package models

use serde::Deserialize;

use tsref_fs::NormalizedPath;

use crate::lister::{WorkspaceLister, parse_listing};
use crate::Result;

/// One package as reported by the workspace manager's listing command.
///
/// `workspace_dependencies` holds the names of other in-workspace packages
/// this package depends on, in the order the manager reports them. That
/// order is load-bearing: reference lists are emitted in it, and the sync
/// comparison is byte-exact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub workspace_dependencies: Vec<String>,
}

/// A loaded workspace: the discovered root plus the package listing.
///
/// Immutable once loaded; the listing command runs exactly once per run.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: NormalizedPath,
    packages: Vec<PackageInfo>,
}

impl Workspace {
    /// Load the workspace rooted at `root` through the given lister.
    ///
    /// A listing entry describing the workspace root itself (location `"."`
    /// or empty) is not a package and is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing command fails or emits a line that is
    /// not valid JSON.
    pub async fn load(root: NormalizedPath, lister: &dyn WorkspaceLister) -> Result<Self> {
        let stdout = lister.list(&root).await?;
        let packages: Vec<PackageInfo> = parse_listing(&stdout)?
            .into_iter()
            .filter(|pkg| !pkg.location.is_empty() && pkg.location != ".")
            .map(|pkg| PackageInfo {
                location: NormalizedPath::new(&pkg.location).as_str().to_string(),
                ..pkg
            })
            .collect();

        tracing::debug!(root = %root, count = packages.len(), "loaded workspace");
        Ok(Self { root, packages })
    }

    /// The workspace root directory.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Packages in enumeration order.
    pub fn packages(&self) -> &[PackageInfo] {
        &self.packages
    }

    /// Resolve a package name to its location, if the name is known.
    pub fn location_of(&self, name: &str) -> Option<&str> {
        self.packages
            .iter()
            .find(|pkg| pkg.name == name)
            .map(|pkg| pkg.location.as_str())
    }

    /// Assemble a workspace from already-known parts, bypassing the listing
    /// command. Intended for fixtures and tests.
    pub fn from_parts(root: NormalizedPath, packages: Vec<PackageInfo>) -> Self {
        Self { root, packages }
    }
}
