//! Configuration settings for entity-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::codegen::Dialect;
use crate::error::{CodegenError, Result};

/// Main configuration struct for entity generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Directory holding persisted table definition files (one TOML per table)
    #[serde(default = "default_definitions_dir")]
    pub definitions_dir: PathBuf,

    /// Path to the entity-model template file
    #[serde(default = "default_template_file")]
    pub template_file: PathBuf,

    /// Catalog of already-generated entities, used by the uniqueness check.
    /// When absent the check runs against an empty registry.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// Directory scanned for the web project marker; generated files land
    /// under this directory
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Marker suffixes identifying the web project, tried in order
    #[serde(default = "default_project_suffixes")]
    pub project_suffixes: Vec<String>,

    /// Target database dialect ("mysql" or "sqlserver")
    #[serde(default)]
    pub dialect: Dialect,

    /// Extension for generated source files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Dry run mode - resolve everything but write no file
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_definitions_dir() -> PathBuf {
    PathBuf::from(defaults::DEFINITIONS_DIR)
}
fn default_template_file() -> PathBuf {
    PathBuf::from(defaults::TEMPLATE_FILE)
}
fn default_project_dir() -> PathBuf {
    PathBuf::from(defaults::PROJECT_DIR)
}
fn default_project_suffixes() -> Vec<String> {
    defaults::PROJECT_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_output_extension() -> String {
    defaults::OUTPUT_EXTENSION.to_string()
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            definitions_dir: default_definitions_dir(),
            template_file: default_template_file(),
            catalog_file: None,
            project_dir: default_project_dir(),
            project_suffixes: default_project_suffixes(),
            dialect: Dialect::default(),
            output_extension: default_output_extension(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl GenConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("entity-codegen").required(false));
        }

        // Override with environment variables (ENTITY_CODEGEN_*)
        builder = builder.add_source(Environment::with_prefix("ENTITY_CODEGEN").separator("_"));

        let config: GenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.template_file.as_os_str().is_empty() {
            return Err(CodegenError::ValidationError(
                "template_file is required".into(),
            ));
        }

        if !self.template_file.exists() {
            return Err(CodegenError::ValidationError(format!(
                "Template file not found: {}",
                self.template_file.display()
            )));
        }

        if self.output_extension.trim().is_empty() {
            return Err(CodegenError::ValidationError(
                "output_extension must not be empty".into(),
            ));
        }

        if self.project_suffixes.is_empty() {
            return Err(CodegenError::ValidationError(
                "at least one project marker suffix is required".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenConfig::default();
        assert_eq!(config.output_extension, "cs");
        assert_eq!(config.dialect, Dialect::SqlServer);
        assert_eq!(config.project_suffixes[0], ".WebApi");
        assert!(!config.dry_run);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_validation_missing_template() {
        let config = GenConfig {
            template_file: PathBuf::from("/nonexistent/DomainModel.html"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_with_dialect() {
        let toml_content = r#"
            dialect = "mysql"
            log_level = "debug"
        "#;
        let config: GenConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(config.log_level, Some("debug".to_string()));
    }
}
