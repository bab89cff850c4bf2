//! Template assembly - placeholder substitution and output path derivation
//!
//! The template is a fixed shape with five named placeholders; substitution
//! is a single pass and deliberately not a general templating language.

use std::path::{Path, PathBuf};

use crate::error::{CodegenError, Result};
use crate::store::TableDefinition;

/// Exact placeholder tokens the template must carry. Unmatched tokens are
/// left verbatim; substitution never fails on them.
const TABLE_NAME: &str = "{TableName}";
const ATTRIBUTE_LIST: &str = "{AttributeList}";
const START_NAME: &str = "{StartName}";
const ATTRIBUTE_MANAGER: &str = "{AttributeManager}";
const NAMESPACE: &str = "{Namespace}";

/// Fill the template with table-level values and derive the output path.
///
/// The namespace's first dot segment is the root identifier: it forms both
/// the `{StartName}` value and the `<StartName>.Entity` model namespace the
/// file lands under.
pub fn assemble(
    template: &str,
    table: &TableDefinition,
    attribute_block: &str,
    output_root: &Path,
    extension: &str,
) -> Result<(PathBuf, String)> {
    let start_name = start_name(table)?;
    let model_namespace = format!("{start_name}.Entity");

    let entity_attr = entity_attribute(table);

    let content = substitute(
        template,
        &[
            (TABLE_NAME, table.table_name.as_str()),
            (ATTRIBUTE_LIST, attribute_block),
            (START_NAME, start_name),
            (ATTRIBUTE_MANAGER, entity_attr.as_str()),
            (NAMESPACE, model_namespace.as_str()),
        ],
    );

    let file_name = format!("{}.{}", table.table_name, extension.trim_start_matches('.'));
    let path = output_root
        .join(&model_namespace)
        .join("DomainModels")
        .join(&table.folder)
        .join(file_name);

    Ok((path, content))
}

/// First dot segment of the configured namespace
fn start_name(table: &TableDefinition) -> Result<&str> {
    let namespace = table.namespace.trim();
    if namespace.is_empty() {
        return Err(CodegenError::ConfigError(format!(
            "table '{}' has no namespace configured",
            table.table_name
        )));
    }
    Ok(namespace.split('.').next().unwrap_or(namespace))
}

/// Entity-level annotation composed from the table comment and, when
/// present, the physical table name.
fn entity_attribute(table: &TableDefinition) -> String {
    let mut pairs = vec![format!("TableCnName = \"{}\"", table.comment)];
    if !table.module_code.is_empty() {
        pairs.push(format!("TableName = \"{}\"", table.module_code));
    }

    let joined = pairs.join(",");
    if joined.is_empty() {
        joined
    } else {
        format!("[Entity({joined})]")
    }
}

/// Single-pass named-placeholder substitution
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut content = template.to_string();
    for (token, value) in replacements {
        content = content.replace(token, value);
    }
    content
}
