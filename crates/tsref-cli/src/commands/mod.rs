//! Command implementations for tsref-cli

pub mod completions;
pub mod sync;

pub use completions::run_completions;
pub use sync::{run_check, run_write};
