//! entity-codegen: Generate entity model classes from persisted table metadata
//!
//! This crate provides both a CLI tool and a library for scaffolding
//! entity-model source files from relational table metadata captured by an
//! admin surface. Given a persisted table definition (columns, types,
//! nullability, key flags), it:
//!
//! - Maps each column to a declaration type through a deterministic,
//!   dialect-aware policy (GUID promotion, length capping, optional-type
//!   markers)
//! - Renders the per-column annotation blocks and field declarations
//! - Substitutes them into a fixed five-placeholder template
//! - Refuses to generate when the module name/code pair collides with an
//!   entity already recorded in the project catalog
//!
//! # Library Usage
//!
//! ```rust,ignore
//! use entity_codegen::GeneratorBuilder;
//!
//! let generated = GeneratorBuilder::new("./definitions")
//!     .template_file("./templates/DomainModel.html")
//!     .project_dir("./solution")
//!     .generate("orders")?;
//! println!("wrote {}", generated.path.display());
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! entity-codegen --config entity-codegen.toml generate orders
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod project;
pub mod store;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use codegen::{Dialect, EntityRegistry};
pub use config::GenConfig;
pub use error::{CodegenError, Result};
pub use store::{ColumnDefinition, TableDefinition, TableStore, TomlStore};

/// The assembled output of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedEntity {
    /// Where the file was (or would be, in dry-run mode) written
    pub path: PathBuf,
    /// The full generated source text
    pub content: String,
}

/// Generate the entity model for one table definition, reading definitions
/// from the configured TOML store.
pub fn generate(config: &GenConfig, table_id: &str) -> Result<GeneratedEntity> {
    let store = TomlStore::new(&config.definitions_dir);
    generate_with_store(config, &store, table_id)
}

/// Generate against any [`TableStore`] implementation.
///
/// All validation - uniqueness check included - runs before anything touches
/// the file system; a failing call never leaves a partial file behind.
pub fn generate_with_store(
    config: &GenConfig,
    store: &dyn TableStore,
    table_id: &str,
) -> Result<GeneratedEntity> {
    info!("Loading table definition '{table_id}'");
    let table = store.find_table(table_id)?;
    let columns = store.find_columns(table_id)?;
    if columns.is_empty() {
        return Err(CodegenError::NotFound(format!(
            "no columns defined for table '{table_id}'"
        )));
    }
    debug!(
        "Table '{}': {} columns, dialect {:?}",
        table.table_name,
        columns.len(),
        config.dialect
    );

    let registry = match &config.catalog_file {
        Some(path) => EntityRegistry::load(path)?,
        None => EntityRegistry::new(),
    };
    registry.validate(&table.module_name, &table.module_code)?;

    let attribute_block = codegen::render_attribute_block(&table, &columns, config.dialect)?;

    let template = std::fs::read_to_string(&config.template_file).map_err(|e| {
        CodegenError::ConfigError(format!(
            "failed to read template {}: {}",
            config.template_file.display(),
            e
        ))
    })?;

    let project_dir = project::locate_project(&config.project_dir, &config.project_suffixes)?;
    let output_root = project_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.project_dir.clone());

    let (path, content) = codegen::assemble(
        &template,
        &table,
        &attribute_block,
        &output_root,
        &config.output_extension,
    )?;

    if config.dry_run {
        info!("Dry run - would write {:?}", path);
    } else {
        codegen::write_output(&path, &content)?;
        info!("Generated entity model {:?}", path);
    }

    Ok(GeneratedEntity { path, content })
}

/// Builder pattern for programmatic configuration
pub struct GeneratorBuilder {
    config: GenConfig,
}

impl GeneratorBuilder {
    /// Create a new builder reading definitions from the given directory
    pub fn new(definitions_dir: impl AsRef<Path>) -> Self {
        let config = GenConfig {
            definitions_dir: definitions_dir.as_ref().to_path_buf(),
            ..Default::default()
        };
        Self { config }
    }

    /// Set the entity-model template file
    pub fn template_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.template_file = path.as_ref().to_path_buf();
        self
    }

    /// Set the entity catalog used by the uniqueness check
    pub fn catalog_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.catalog_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the solution directory scanned for the web project marker
    pub fn project_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.config.project_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the target database dialect
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// Set the generated file extension
    pub fn output_extension(mut self, ext: &str) -> Self {
        self.config.output_extension = ext.to_string();
        self
    }

    /// Enable dry run mode (resolve everything, write nothing)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Run generation for one table definition
    pub fn generate(self, table_id: &str) -> Result<GeneratedEntity> {
        generate(&self.config, table_id)
    }
}
