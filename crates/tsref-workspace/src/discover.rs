//! Workspace root discovery

use std::path::Path;

use tsref_fs::{NormalizedPath, WorkspaceFile};

use crate::{Error, Result};

/// Find the workspace root by walking up from `start`.
///
/// The root is the nearest ancestor directory (including `start` itself)
/// whose `package.json` declares a `workspaces` field. Discovery happens
/// before any other I/O; failure here aborts the run.
///
/// # Errors
///
/// Returns [`Error::RootNotFound`] when no ancestor qualifies.
pub fn find_workspace_root(start: impl AsRef<Path>) -> Result<NormalizedPath> {
    let start = NormalizedPath::new(start.as_ref()).canonicalize()?;

    let mut dir = Some(start.clone());
    while let Some(current) = dir {
        let manifest = current.join(WorkspaceFile::PackageManifest);
        if manifest.is_file() && declares_workspaces(&manifest) {
            tracing::debug!(root = %current, "discovered workspace root");
            return Ok(current);
        }
        dir = current.parent();
    }

    Err(Error::RootNotFound {
        start: start.to_native(),
    })
}

/// Whether a package.json declares a `workspaces` field.
///
/// A manifest that cannot be read or parsed is treated as a non-root so
/// discovery keeps walking; only the root's own files get strict parsing.
fn declares_workspaces(manifest: &NormalizedPath) -> bool {
    tsref_fs::io::read_text(manifest)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .map(|value| value.get("workspaces").is_some())
        .unwrap_or(false)
}
