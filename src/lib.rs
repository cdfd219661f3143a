pub mod config;
pub mod segments;
pub mod themes;
pub mod utils;
pub mod vcs;

pub use config::*;
pub use segments::*;
pub use themes::*;
pub use utils::*;
pub use vcs::*;
