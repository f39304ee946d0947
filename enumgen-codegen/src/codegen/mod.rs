//! Enum rendering module

mod member;
mod renderer;
mod template;

pub use member::*;
pub use renderer::*;
pub use template::*;
