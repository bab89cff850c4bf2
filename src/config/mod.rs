//! Configuration module

mod defaults;
mod settings;

pub use settings::GenConfig;
