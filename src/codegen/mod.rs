//! Entity generation module

mod attribute_renderer;
mod registry;
mod template;
mod type_mapper;

pub use attribute_renderer::render_attribute_block;
pub use registry::EntityRegistry;
pub use template::assemble;
pub use type_mapper::{map, Dialect, MappedType};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::Result;

static PATH_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    let locks = PATH_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = locks.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(()))),
    )
}

/// Write generated content, serializing concurrent writers targeting the
/// same output path. Cross-process writers still race last-writer-wins.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let lock = path_lock(path);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
