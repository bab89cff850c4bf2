//! Persisted metadata structures for table definitions

use serde::{Deserialize, Serialize};

/// One generation unit: a logical table plus its target location
///
/// Created and edited by the external admin CRUD surface; the generation
/// engine treats it as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Definition id (storage key)
    pub id: String,

    /// Table name; also the generated class and file name
    pub table_name: String,

    /// Human-readable table comment
    #[serde(default)]
    pub comment: String,

    /// Target namespace, dot-segmented; the first segment is the root
    /// identifier of the generated file
    pub namespace: String,

    /// Output folder under the DomainModels tree
    #[serde(default)]
    pub folder: String,

    /// Physical table name (short module identifier)
    #[serde(default)]
    pub module_code: String,

    /// Human-facing module alias
    #[serde(default)]
    pub module_name: String,

    /// Optional one-to-many child table rendered as a collection property
    #[serde(default)]
    pub detail_table_name: Option<String>,

    /// Comment for the child table
    #[serde(default)]
    pub detail_comment: Option<String>,

    /// Free-form options blob, consumed by other admin surfaces
    #[serde(default)]
    pub options: Option<String>,

    /// Classification id
    #[serde(default)]
    pub type_id: Option<String>,

    /// Classification name
    #[serde(default)]
    pub type_name: Option<String>,
}

impl TableDefinition {
    /// Whether a child table is configured for this definition
    pub fn has_detail_table(&self) -> bool {
        self.detail_table_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// One column from table-structure introspection plus admin-edited overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name, used verbatim as the generated member name
    pub column_name: String,

    /// Native type string (e.g. "varchar", "string", "uniqueidentifier")
    #[serde(default)]
    pub column_type: String,

    /// Display comment
    #[serde(default)]
    pub comment: String,

    /// Whether this column is (part of) the primary key
    #[serde(default)]
    pub is_key: bool,

    /// Whether the column is NOT NULL
    #[serde(default)]
    pub is_required: bool,

    /// Declared max length; 0 means unbounded
    #[serde(default)]
    pub max_length: i32,

    /// Explicit sort value; columns render in descending order
    #[serde(default)]
    pub sort: i32,

    /// Editor widget name; presence marks the column editable
    #[serde(default)]
    pub edit_row: Option<String>,

    /// Whether the column shows up in list views (other admin surfaces)
    #[serde(default = "default_true")]
    pub is_list: bool,

    /// Whether the column shows up in insert forms (other admin surfaces)
    #[serde(default = "default_true")]
    pub is_insert: bool,

    /// Whether the column shows up in edit forms (other admin surfaces)
    #[serde(default = "default_true")]
    pub is_edit: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnDefinition {
    /// Display label: the comment when present, otherwise the column name
    pub fn display_name(&self) -> &str {
        if self.comment.is_empty() {
            &self.column_name
        } else {
            &self.comment
        }
    }

    /// A column with a blank native type cannot be rendered
    pub fn is_malformed(&self) -> bool {
        self.column_type.trim().is_empty()
    }
}
