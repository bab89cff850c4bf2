//! Default configuration values - single source of truth

/// Default directory holding persisted table definitions
pub const DEFINITIONS_DIR: &str = "./definitions";

/// Default entity-model template file
pub const TEMPLATE_FILE: &str = "./templates/DomainModel.html";

/// Default directory scanned for the web project marker
pub const PROJECT_DIR: &str = ".";

/// Marker suffixes identifying the web project, tried in order
pub const PROJECT_SUFFIXES: &[&str] = &[".WebApi", "Api", ".Mvc"];

/// Default extension for generated source files
pub const OUTPUT_EXTENSION: &str = "cs";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
