//! Workspace enumeration and tsconfig probing for tsref
//!
//! Everything the sync engine knows about a workspace comes from here: the
//! discovered root, the package listing reported by the workspace manager,
//! and one [`ConfigDescriptor`] per package describing its tsconfig.

pub mod discover;
pub mod error;
pub mod lister;
pub mod package;
pub mod probe;

pub use discover::find_workspace_root;
pub use error::{Error, Result};
pub use lister::{WorkspaceLister, YarnLister, parse_listing};
pub use package::{PackageInfo, Workspace};
pub use probe::{ConfigDescriptor, probe_all, probe_config};
