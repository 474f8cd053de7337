//! Sync outcome and report types

use tsref_fs::NormalizedPath;

/// How one tsconfig compared against its target content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// On-disk text matches the canonical rendering byte for byte
    InSync,
    /// Text differs; nothing written (check mode)
    OutOfSync,
    /// Text differed and the file was overwritten (write mode)
    Written,
}

/// Outcome for one tsconfig file.
///
/// Packages without a tsconfig produce no outcome at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Package name, or "workspace root" for the root tsconfig
    pub label: String,
    /// The tsconfig the outcome refers to
    pub file: NormalizedPath,
    pub status: SyncStatus,
}

/// Report for a whole run: per-package outcomes in package-enumeration
/// order, plus the root outcome (always processed last).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub packages: Vec<SyncOutcome>,
    pub root: SyncOutcome,
}

impl RunReport {
    /// All outcomes including the root, root last.
    pub fn all(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.packages.iter().chain(std::iter::once(&self.root))
    }

    /// Whether every tsconfig was already in sync.
    pub fn is_clean(&self) -> bool {
        self.all().all(|o| o.status == SyncStatus::InSync)
    }

    /// Whether any file was overwritten.
    pub fn wrote_any(&self) -> bool {
        self.all().any(|o| o.status == SyncStatus::Written)
    }

    /// Outcomes that were not in sync, in report order.
    pub fn drifted(&self) -> Vec<&SyncOutcome> {
        self.all()
            .filter(|o| o.status != SyncStatus::InSync)
            .collect()
    }
}
