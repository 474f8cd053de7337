//! Filesystem primitives for tsref
//!
//! Provides forward-slash-normalized path handling, relative-path
//! computation, and atomic file writes.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::WorkspaceFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;
