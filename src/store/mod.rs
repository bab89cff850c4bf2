//! Table and column definition store

mod definitions;
mod repository;

pub use definitions::*;
pub use repository::*;
