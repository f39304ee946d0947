//! Enum config model and loader

mod entry;
mod loader;
mod normalize;

pub use entry::*;
pub use loader::*;
pub use normalize::*;
