//! Table definition stores
//!
//! The admin CRUD surface that persists table definitions lives outside this
//! crate; [`TableStore`] is the seam it plugs into. The bundled [`TomlStore`]
//! reads one TOML file per table definition and backs the CLI.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::definitions::{ColumnDefinition, TableDefinition};
use crate::error::{CodegenError, Result};

/// Read access to persisted table definitions
pub trait TableStore {
    /// Look up a table definition by id
    fn find_table(&self, id: &str) -> Result<TableDefinition>;

    /// Load the column definitions belonging to a table
    fn find_columns(&self, id: &str) -> Result<Vec<ColumnDefinition>>;
}

/// File layout of a persisted definition: a `[table]` section plus repeated
/// `[[columns]]` entries
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    table: TableDefinition,
    #[serde(default)]
    columns: Vec<ColumnDefinition>,
}

/// TOML-file-backed store: `<dir>/<id>.toml` per table definition
#[derive(Debug, Clone)]
pub struct TomlStore {
    dir: PathBuf,
}

impl TomlStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read_definition(&self, id: &str) -> Result<DefinitionFile> {
        let path = self.dir.join(format!("{id}.toml"));
        debug!("Reading table definition {:?}", path);
        let content = std::fs::read_to_string(&path).map_err(|_| {
            CodegenError::NotFound(format!("no table definition found for '{id}'"))
        })?;
        toml::from_str(&content).map_err(|e| {
            CodegenError::MalformedInput(format!(
                "failed to parse definition {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl TableStore for TomlStore {
    fn find_table(&self, id: &str) -> Result<TableDefinition> {
        Ok(self.read_definition(id)?.table)
    }

    fn find_columns(&self, id: &str) -> Result<Vec<ColumnDefinition>> {
        let columns = self.read_definition(id)?.columns;
        if columns.is_empty() {
            return Err(CodegenError::NotFound(format!(
                "no columns defined for table '{id}'"
            )));
        }
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"
        [table]
        id = "orders"
        table_name = "Order"
        namespace = "Demo.App"
        folder = "Sales"

        [[columns]]
        column_name = "Id"
        column_type = "uniqueidentifier"
        is_key = true
        is_required = true

        [[columns]]
        column_name = "Name"
        column_type = "string"
        max_length = 50
    "#;

    #[test]
    fn test_load_definition_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("orders.toml"), DEFINITION).unwrap();

        let store = TomlStore::new(dir.path());
        let table = store.find_table("orders").unwrap();
        assert_eq!(table.table_name, "Order");
        assert_eq!(table.namespace, "Demo.App");

        let columns = store.find_columns("orders").unwrap();
        assert_eq!(columns.len(), 2);
        assert!(columns[0].is_key);
        assert_eq!(columns[1].max_length, 50);
    }

    #[test]
    fn test_missing_definition_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::new(dir.path());
        let err = store.find_table("ghost").unwrap_err();
        assert!(matches!(err, CodegenError::NotFound(_)));
    }

    #[test]
    fn test_definition_without_columns() {
        let dir = tempfile::tempdir().unwrap();
        let content = r#"
            [table]
            id = "empty"
            table_name = "Empty"
            namespace = "Demo"
        "#;
        std::fs::write(dir.path().join("empty.toml"), content).unwrap();

        let store = TomlStore::new(dir.path());
        assert!(store.find_table("empty").is_ok());
        let err = store.find_columns("empty").unwrap_err();
        assert!(matches!(err, CodegenError::NotFound(_)));
    }
}
