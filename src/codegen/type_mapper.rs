//! Column metadata to entity type mapping

use serde::{Deserialize, Serialize};

use crate::store::ColumnDefinition;

/// Target relational engine family.
///
/// Only a handful of mapping decisions differ; the notable one is the
/// MySQL convention of storing GUIDs as 36-character strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    #[default]
    SqlServer,
}

/// The resolved mapping for one column: everything the renderer needs to
/// emit annotations and the field declaration.
///
/// A pure function of the column and the dialect; the input column is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Declaration type, including a trailing `?` for optional value types
    pub declaration_type: String,
    /// Storage type for the column annotation, including any length clause
    pub storage_type: String,
    /// Max length after dialect capping; 0 means unbounded
    pub max_length: i32,
    /// Whether a `[MaxLength(n)]` constraint annotation applies
    pub emit_max_length: bool,
    /// Primary-key flag, passed through for the renderer
    pub is_key: bool,
}

/// Practical ceiling for a single-byte variable-length text column
const ANSI_TEXT_CEILING: i32 = 8000;
/// Practical ceiling for a double-byte variable-length text column
const UNICODE_TEXT_CEILING: i32 = 4000;

/// Map one column descriptor to its entity type.
///
/// Total: every native type string resolves to a declaration type; unknown
/// types echo the trimmed input. Rules apply in order: length capping, the
/// key-only length clause, GUID promotion, numeric/date normalization, and
/// finally the optional-type marker (textual types are inherently nullable
/// and never receive one).
pub fn map(column: &ColumnDefinition, dialect: Dialect) -> MappedType {
    let native = column.column_type.trim();
    let lower = native.to_lowercase();

    // Length capping for variable-length text beyond the dialect ceiling
    let mut max_length = column.max_length;
    if (native == "varchar" && max_length > ANSI_TEXT_CEILING)
        || (native == "nvarchar" && max_length > UNICODE_TEXT_CEILING)
    {
        max_length = 0;
    }

    let promoted = is_guid(column, native, &lower, max_length, dialect);

    // Non-key textual columns carry their length as a constraint annotation
    // instead of a length clause on the storage type
    let emit_max_length =
        !column.is_key && native == "string" && max_length > 0 && max_length < ANSI_TEXT_CEILING;

    let storage_type = if promoted {
        "uniqueidentifier".to_string()
    } else if column.is_key && lower == "string" {
        format!("{}{}", native, length_clause(max_length))
    } else if native == "bool" {
        // Booleans persist as the engine's bit type
        "bit".to_string()
    } else {
        native.to_string()
    };

    let declaration_type = if promoted {
        optional_suffix("Guid", column.is_required)
    } else {
        let base = match native {
            "int" => "int",
            "bigint" | "long" => "long",
            "bool" => "bit",
            "Date" => "DateTime",
            other => other,
        };
        // Strings are reference types; only value types take the marker
        if lower != "string" {
            optional_suffix(base, column.is_required)
        } else {
            base.to_string()
        }
    };

    MappedType {
        declaration_type,
        storage_type,
        max_length,
        emit_max_length,
        is_key: column.is_key,
    }
}

/// GUID promotion: key columns with a textual or uniqueidentifier type, any
/// explicit guid alias, and - under MySQL only - 36-character strings.
fn is_guid(
    column: &ColumnDefinition,
    native: &str,
    lower: &str,
    max_length: i32,
    dialect: Dialect,
) -> bool {
    (column.is_key && (native == "string" || native == "uniqueidentifier"))
        || lower == "guid"
        || (dialect == Dialect::MySql && native == "string" && max_length == 36)
}

/// Length clause for a textual primary key: capped or unspecified lengths
/// become `(max)`
fn length_clause(max_length: i32) -> String {
    if max_length <= 0 {
        "(max)".to_string()
    } else {
        format!("({max_length})")
    }
}

fn optional_suffix(base: &str, is_required: bool) -> String {
    if is_required {
        base.to_string()
    } else {
        format!("{base}?")
    }
}
