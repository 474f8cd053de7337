//! tsconfig probing
//!
//! One probe per package, all issued concurrently (each touches only its own
//! file), gathered positionally behind a barrier so descriptor order matches
//! package-enumeration order. The composite set is derived from the gathered
//! results and never mutated afterwards.

use std::io::ErrorKind;

use serde_json::Value;

use tsref_fs::{NormalizedPath, WorkspaceFile};

use crate::package::PackageInfo;
use crate::{Error, Result};

/// What probing found for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDescriptor {
    /// Path to the package's tsconfig, absent when the file does not exist
    pub path: Option<NormalizedPath>,
    /// Whether `compilerOptions.composite` is truthy
    pub composite: bool,
}

/// Probe one package's tsconfig.
///
/// A missing file yields an absent descriptor; an existing file that is not
/// valid JSON is fatal for the whole run.
pub async fn probe_config(root: &NormalizedPath, location: &str) -> Result<ConfigDescriptor> {
    let candidate = root.join(location).join(WorkspaceFile::Tsconfig);

    let content = match tokio::fs::read_to_string(candidate.to_native()).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(location, "no tsconfig");
            return Ok(ConfigDescriptor::default());
        }
        Err(e) => return Err(tsref_fs::Error::io(candidate.to_native(), e).into()),
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        path: candidate.to_native(),
        message: e.to_string(),
    })?;

    let composite = value
        .get("compilerOptions")
        .and_then(|options| options.get("composite"))
        .map(is_truthy)
        .unwrap_or(false);

    tracing::debug!(location, composite, "probed tsconfig");
    Ok(ConfigDescriptor {
        path: Some(candidate),
        composite,
    })
}

/// Probe every package concurrently and gather descriptors positionally.
pub async fn probe_all(
    root: &NormalizedPath,
    packages: &[PackageInfo],
) -> Result<Vec<ConfigDescriptor>> {
    let mut handles = Vec::with_capacity(packages.len());
    for pkg in packages {
        let root = root.clone();
        let location = pkg.location.clone();
        handles.push(tokio::spawn(
            async move { probe_config(&root, &location).await },
        ));
    }

    let mut descriptors = Vec::with_capacity(handles.len());
    for handle in handles {
        descriptors.push(handle.await??);
    }
    Ok(descriptors)
}

/// JavaScript truthiness for a JSON value.
///
/// `composite` is boolean-ish in the wild; the original configs follow JS
/// semantics, so `0`, `""`, `null`, and `false` all count as unset.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
