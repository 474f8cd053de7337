//! SyncEngine implementation
//!
//! The run proceeds in three stages with a barrier between each: probe every
//! package's tsconfig concurrently, sync every package with a tsconfig
//! concurrently, then handle the workspace root. The composite set and the
//! name-to-location map are built once between the first two stages and
//! shared read-only afterwards.
//!
//! There is no rollback: in write mode a failure mid-run can leave some
//! files updated and others not. The next successful run converges them.

use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::sync::Arc;

use serde_json::{Value, json};

use tsref_fs::{NormalizedPath, WorkspaceFile};
use tsref_workspace::{ConfigDescriptor, PackageInfo, Workspace, WorkspaceLister, probe_all};

use crate::outcome::{RunReport, SyncOutcome, SyncStatus};
use crate::{Error, Result};

/// Label used for the root tsconfig in outcomes and logs.
const ROOT_LABEL: &str = "workspace root";

/// Whether a run repairs drift or only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Compare only; never touch the filesystem
    Check,
    /// Overwrite every out-of-sync tsconfig with its target text
    Write,
}

/// Engine for synchronizing project references with the workspace
/// dependency graph.
pub struct SyncEngine {
    /// Workspace root directory
    root: NormalizedPath,
    mode: SyncMode,
}

impl SyncEngine {
    /// Create a new SyncEngine for the workspace rooted at `root`.
    pub fn new(root: NormalizedPath, mode: SyncMode) -> Self {
        Self { root, mode }
    }

    /// Get the workspace root path.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Get the run mode.
    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Run one full sync pass over the workspace.
    ///
    /// # Errors
    ///
    /// Any listing, parse, render, or I/O failure aborts the run; there is
    /// no per-package recovery.
    pub async fn run(&self, lister: &dyn WorkspaceLister) -> Result<RunReport> {
        let workspace = Workspace::load(self.root.clone(), lister).await?;
        let descriptors = probe_all(&self.root, workspace.packages()).await?;

        // Write-once shared state; read-only once the sync tasks start.
        let mut composite = HashSet::new();
        let mut locations = HashMap::new();
        for (pkg, desc) in workspace.packages().iter().zip(&descriptors) {
            locations.insert(pkg.name.clone(), pkg.location.clone());
            if desc.composite {
                composite.insert(pkg.location.clone());
            }
        }
        let composite = Arc::new(composite);
        let locations = Arc::new(locations);

        let mut handles = Vec::new();
        for (pkg, desc) in workspace.packages().iter().zip(&descriptors) {
            // No tsconfig: the package cannot declare references and
            // produces no outcome.
            let Some(config_path) = desc.path.clone() else {
                continue;
            };
            let pkg = pkg.clone();
            let composite = Arc::clone(&composite);
            let locations = Arc::clone(&locations);
            let mode = self.mode;
            handles.push(tokio::spawn(async move {
                sync_package(pkg, config_path, &composite, &locations, mode).await
            }));
        }

        let mut packages = Vec::with_capacity(handles.len());
        for handle in handles {
            packages.push(handle.await??);
        }

        // The root references every package that owns a tsconfig, so it is
        // processed only after all per-package results are in.
        let root = self
            .sync_root(workspace.packages(), &descriptors)
            .await?;

        Ok(RunReport { packages, root })
    }

    /// Compare (and in write mode rebuild) the root tsconfig.
    ///
    /// The root is a pure reference hub: its target is exactly
    /// `{"files": [], "references": [...]}` with one entry per package that
    /// owns a tsconfig, whatever else the file may have held before.
    async fn sync_root(
        &self,
        packages: &[PackageInfo],
        descriptors: &[ConfigDescriptor],
    ) -> Result<SyncOutcome> {
        let references: Vec<Value> = packages
            .iter()
            .zip(descriptors)
            .filter_map(|(_, desc)| desc.path.as_ref())
            .filter_map(|path| path.relative_from(&self.root))
            .map(|rel| json!({ "path": rel.as_str() }))
            .collect();
        let target = json!({ "files": [], "references": references });

        let root_config = self.root.join(WorkspaceFile::Tsconfig);
        // A root tsconfig that does not exist yet compares as empty text,
        // so write mode creates it.
        let current = match tokio::fs::read_to_string(root_config.to_native()).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(tsref_fs::Error::io(root_config.to_native(), e).into()),
        };

        let expected = tsref_content::render(&target, &root_config)?;
        resolve_drift(ROOT_LABEL.to_string(), root_config, &current, &expected, self.mode)
    }
}

/// Sync one package's tsconfig against its target references.
async fn sync_package(
    pkg: PackageInfo,
    config_path: NormalizedPath,
    composite: &HashSet<String>,
    locations: &HashMap<String, String>,
    mode: SyncMode,
) -> Result<SyncOutcome> {
    let current = tokio::fs::read_to_string(config_path.to_native())
        .await
        .map_err(|e| tsref_fs::Error::io(config_path.to_native(), e))?;

    let mut config: Value = serde_json::from_str(&current).map_err(|e| Error::ConfigParse {
        path: config_path.to_native(),
        message: e.to_string(),
    })?;
    let Some(fields) = config.as_object_mut() else {
        return Err(Error::ConfigParse {
            path: config_path.to_native(),
            message: "expected a JSON object".to_string(),
        });
    };

    let references = reference_targets(&pkg, composite, locations);
    tracing::debug!(package = %pkg.name, count = references.len(), "computed target references");

    // Replace `references` wholesale; every other field stays as authored.
    fields.insert("references".to_string(), Value::Array(references));

    let expected = tsref_content::render(&config, &config_path)?;
    resolve_drift(pkg.name, config_path, &current, &expected, mode)
}

/// Compute the reference entries for one package.
///
/// A dependency qualifies when its name resolves to a known location, that
/// location is composite, and it is not the package itself. Order follows
/// the dependency list as the workspace manager reported it.
fn reference_targets(
    pkg: &PackageInfo,
    composite: &HashSet<String>,
    locations: &HashMap<String, String>,
) -> Vec<Value> {
    let self_dir = NormalizedPath::new(&pkg.location);
    pkg.workspace_dependencies
        .iter()
        .filter_map(|dep| locations.get(dep))
        .filter(|location| composite.contains(*location) && *location != &pkg.location)
        .filter_map(|location| NormalizedPath::new(location).relative_from(&self_dir))
        .map(|rel| json!({ "path": rel.as_str() }))
        .collect()
}

/// Classify one file against its expected text, writing in write mode.
fn resolve_drift(
    label: String,
    file: NormalizedPath,
    current: &str,
    expected: &str,
    mode: SyncMode,
) -> Result<SyncOutcome> {
    if current == expected {
        return Ok(SyncOutcome {
            label,
            file,
            status: SyncStatus::InSync,
        });
    }

    tracing::debug!(
        file = %file,
        "drift detected:\n{}",
        tsref_content::unified_diff(current, expected, file.as_str())
    );

    let status = match mode {
        SyncMode::Check => SyncStatus::OutOfSync,
        SyncMode::Write => {
            tsref_fs::io::write_text(&file, expected)?;
            SyncStatus::Written
        }
    };

    Ok(SyncOutcome {
        label,
        file,
        status,
    })
}
