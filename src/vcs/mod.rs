//! Git status engine: run the tool, parse porcelain output, reconcile the
//! signals into one snapshot and resolve the branch name.

pub mod branch;
pub mod runner;
pub mod stats;
pub mod status;

pub use branch::*;
pub use runner::*;
pub use stats::*;
pub use status::*;
