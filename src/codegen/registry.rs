//! Entity registry and module uniqueness validation
//!
//! Replaces the original process-wide reflective type scan with an explicit
//! registry of `entity identifier -> physical table alias`, populated from a
//! catalog produced by the consuming project's build step. The registry only
//! knows about entities present when the catalog was written; entities
//! generated afterwards stay invisible until the catalog is regenerated.
//! Reloading the catalog is the refresh contract, there is no implicit
//! caching behind it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CodegenError, Result};

/// Index of already-generated domain entities
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    /// entity identifier -> declared physical-table alias
    entries: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entities: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    table: String,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from a catalog file (`[[entities]]` with `name` and
    /// `table` keys).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::ConfigError(format!(
                "failed to read entity catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog: CatalogFile = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "failed to parse entity catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut registry = Self::new();
        for entry in catalog.entities {
            registry.register(entry.name, entry.table);
        }
        debug!("Loaded {} catalog entries", registry.len());
        Ok(registry)
    }

    /// Record an entity and the physical table it maps to
    pub fn register(&mut self, entity: impl Into<String>, alias: impl Into<String>) {
        self.entries.insert(entity.into(), alias.into());
    }

    /// Find the entity mapping a physical table alias, if any
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, table)| table.as_str() == alias)
            .map(|(entity, _)| entity.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject generation when the requested module name/code pair would
    /// collide with an existing entity's table mapping.
    ///
    /// Must run, and block generation, before anything is written.
    pub fn validate(&self, module_name: &str, module_code: &str) -> Result<()> {
        for (entity, alias) in &self.entries {
            if entity == module_code && !module_name.is_empty() && module_name != module_code {
                return Err(CodegenError::Conflict(format!(
                    "table '{module_code}' already has an entity; cannot create an aliased entity '{module_name}'"
                )));
            }

            if entity != module_name && alias == module_code {
                return Err(CodegenError::Conflict(format!(
                    "table '{module_code}' is already mapped by entity '{entity}'; \
                     cannot create alias '{module_name}', change the alias to '{entity}'"
                )));
            }
        }
        Ok(())
    }
}
