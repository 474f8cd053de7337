//! Reference sync engine for tsref
//!
//! This crate holds the core logic: given the workspace listing and the
//! probed tsconfig descriptors, compute the project references every
//! tsconfig should declare, compare each file's canonical rendering against
//! what is on disk, and report or repair the difference.
//!
//! # Architecture
//!
//! `tsref-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!            tsref-cli
//!                |
//!           tsref-core
//!                |
//!     +----------+-----------+
//!     |          |           |
//! tsref-fs tsref-workspace tsref-content
//! ```

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::{SyncEngine, SyncMode};
pub use error::{Error, Result};
pub use outcome::{RunReport, SyncOutcome, SyncStatus};
