pub mod logger;
pub mod shorten;

pub use logger::*;
pub use shorten::*;
