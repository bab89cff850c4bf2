//! Project-root location
//!
//! Generated entities land in the development source tree, anchored by the
//! web project directory. The locator scans the configured solution
//! directory for a child whose name ends with one of the marker suffixes
//! (tried in order), mirroring the `.WebApi` / `Api` / `.Mvc` convention of
//! the consuming framework.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Find the web project directory under `search_dir`.
///
/// Suffixes are tried in order; within one suffix the last match by name
/// wins. Returns a `ConfigError` when nothing matches - without a project
/// root there is nowhere to generate into.
pub fn locate_project(search_dir: &Path, suffixes: &[String]) -> Result<PathBuf> {
    let mut dir_names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(search_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Ok(name) = entry.file_name().into_string() {
                dir_names.push(name);
            }
        }
    }
    dir_names.sort();

    for suffix in suffixes {
        if let Some(name) = dir_names.iter().rev().find(|n| n.ends_with(suffix)) {
            let path = search_dir.join(name);
            debug!("Located project directory {:?}", path);
            return Ok(path);
        }
    }

    Err(CodegenError::ConfigError(format!(
        "no project directory ending in {:?} found under {}",
        suffixes,
        search_dir.display()
    )))
}
