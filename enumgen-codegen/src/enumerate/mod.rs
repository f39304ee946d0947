//! Data source enumerators

mod database;
mod filesystem;

pub use database::*;
pub use filesystem::*;
