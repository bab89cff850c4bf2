//! Attribute block renderer - emits the per-column declaration text

use tracing::warn;

use super::type_mapper::{map, Dialect};
use crate::error::{CodegenError, Result};
use crate::store::{ColumnDefinition, TableDefinition};

const INDENT: &str = "       ";
const CRLF: &str = "\r\n";

/// Render the full attribute block for a table: one declaration block per
/// column in descending sort order, plus the optional child-table
/// collection property.
///
/// Generated blocks use CRLF line endings regardless of platform; the
/// downstream tooling consuming the output is line-ending sensitive.
///
/// A column with a blank native type is skipped for attribute emission but
/// still occupies its sort slot, matching the persisted ordering other admin
/// surfaces rely on.
pub fn render_attribute_block(
    table: &TableDefinition,
    columns: &[ColumnDefinition],
    dialect: Dialect,
) -> Result<String> {
    let mut ordered: Vec<&ColumnDefinition> = columns.iter().collect();
    ordered.sort_by(|a, b| b.sort.cmp(&a.sort));

    let mut block = String::new();
    for column in &ordered {
        if column.is_malformed() {
            warn!(
                "column '{}' of table '{}' has no native type, skipping",
                column.column_name, table.table_name
            );
            continue;
        }
        render_column(&mut block, column, dialect);
    }

    if table.has_detail_table() {
        render_detail_collection(&mut block, table, &ordered)?;
    }

    Ok(block)
}

/// One column: doc comment, key marker, display label, max-length
/// constraint, storage-type annotation, editability marker, then the field
/// declaration. Order is fixed.
fn render_column(block: &mut String, column: &ColumnDefinition, dialect: Dialect) {
    let mapped = map(column, dialect);

    block.push_str("/// <summary>");
    block.push_str(CRLF);
    block.push_str(INDENT);
    block.push_str("///");
    block.push_str(&column.comment);
    block.push_str(CRLF);
    block.push_str(INDENT);
    block.push_str("/// </summary>");
    block.push_str(CRLF);

    if mapped.is_key {
        block.push_str(INDENT);
        block.push_str("[Key]");
        block.push_str(CRLF);
    }

    block.push_str(INDENT);
    block.push_str(&format!("[Display(Name =\"{}\")]", column.display_name()));
    block.push_str(CRLF);

    if mapped.emit_max_length {
        block.push_str(INDENT);
        block.push_str(&format!("[MaxLength({})]", mapped.max_length));
        block.push_str(CRLF);
    }

    block.push_str(INDENT);
    block.push_str(&format!("[Column(TypeName=\"{}\")]", mapped.storage_type));
    block.push_str(CRLF);

    if column.edit_row.is_some() {
        block.push_str(INDENT);
        block.push_str("[Editable(true)]");
        block.push_str(CRLF);
    }

    block.push_str(INDENT);
    block.push_str(&format!(
        "public {} {} {{ get; set; }}",
        mapped.declaration_type, column.column_name
    ));
    block.push_str(CRLF);
    block.push_str(CRLF);
    block.push_str(INDENT);
}

/// Child-table collection property, keyed by the first primary-key column
/// among the rendered set.
fn render_detail_collection(
    block: &mut String,
    table: &TableDefinition,
    ordered: &[&ColumnDefinition],
) -> Result<()> {
    let detail_name = table.detail_table_name.as_deref().unwrap_or_default();

    let key_column = ordered
        .iter()
        .find(|c| c.is_key && !c.is_malformed())
        .ok_or_else(|| {
            CodegenError::MalformedInput(format!(
                "detail table '{}' is configured but table '{}' has no key column to anchor the foreign key",
                detail_name, table.table_name
            ))
        })?;

    block.push_str(&format!("[Display(Name =\"{detail_name}\")]"));
    block.push_str(CRLF);
    block.push_str(INDENT);
    block.push_str(&format!("[ForeignKey(\"{}\")]", key_column.column_name));
    block.push_str(CRLF);
    block.push_str(INDENT);
    block.push_str(&format!(
        "public List<{detail_name}> {detail_name} {{ get; set; }}"
    ));
    block.push_str(CRLF);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_column(name: &str, column_type: &str, sort: i32) -> ColumnDefinition {
        ColumnDefinition {
            column_name: name.to_string(),
            column_type: column_type.to_string(),
            comment: String::new(),
            is_key: false,
            is_required: true,
            max_length: 0,
            sort,
            edit_row: None,
            is_list: true,
            is_insert: true,
            is_edit: true,
        }
    }

    fn make_table() -> TableDefinition {
        TableDefinition {
            id: "orders".into(),
            table_name: "Order".into(),
            comment: "Orders".into(),
            namespace: "Demo.App".into(),
            folder: "Sales".into(),
            module_code: "ORD".into(),
            module_name: "Order".into(),
            detail_table_name: None,
            detail_comment: None,
            options: None,
            type_id: None,
            type_name: None,
        }
    }

    #[test]
    fn test_columns_render_in_descending_sort_order() {
        let table = make_table();
        let columns = vec![
            make_column("Third", "int", 3),
            make_column("First", "int", 1),
            make_column("Second", "int", 2),
        ];
        let block = render_attribute_block(&table, &columns, Dialect::SqlServer).unwrap();

        let third = block.find("public int Third").unwrap();
        let second = block.find("public int Second").unwrap();
        let first = block.find("public int First").unwrap();
        assert!(third < second && second < first);
    }

    #[test]
    fn test_key_marker_and_annotations() {
        let table = make_table();
        let mut id = make_column("Id", "uniqueidentifier", 2);
        id.is_key = true;
        let mut name = make_column("Name", "string", 1);
        name.max_length = 50;
        name.comment = "Order name".into();

        let block = render_attribute_block(&table, &[id, name], Dialect::SqlServer).unwrap();

        assert!(block.contains("[Key]\r\n"));
        assert!(block.contains("public Guid Id { get; set; }"));
        assert!(block.contains("[MaxLength(50)]"));
        assert!(block.contains("[Display(Name =\"Order name\")]"));
        assert!(block.contains("[Column(TypeName=\"uniqueidentifier\")]"));
        assert!(block.contains("public string Name { get; set; }"));
        // Exactly one key marker
        assert_eq!(block.matches("[Key]").count(), 1);
    }

    #[test]
    fn test_editable_marker() {
        let table = make_table();
        let mut col = make_column("Status", "int", 0);
        col.edit_row = Some("select".into());
        let block = render_attribute_block(&table, &[col], Dialect::SqlServer).unwrap();
        assert!(block.contains("[Editable(true)]"));
    }

    #[test]
    fn test_malformed_column_is_skipped() {
        let table = make_table();
        let columns = vec![
            make_column("Good", "int", 2),
            make_column("Bad", "  ", 1),
            make_column("AlsoGood", "int", 0),
        ];
        let block = render_attribute_block(&table, &columns, Dialect::SqlServer).unwrap();
        assert!(block.contains("public int Good"));
        assert!(block.contains("public int AlsoGood"));
        assert!(!block.contains("Bad"));
    }

    #[test]
    fn test_detail_collection_references_key_column() {
        let mut table = make_table();
        table.detail_table_name = Some("OrderLine".into());
        let mut id = make_column("Id", "string", 1);
        id.is_key = true;

        let block = render_attribute_block(&table, &[id], Dialect::SqlServer).unwrap();
        assert!(block.contains("[ForeignKey(\"Id\")]"));
        assert!(block.contains("public List<OrderLine> OrderLine { get; set; }"));
        assert!(block.contains("[Display(Name =\"OrderLine\")]"));
    }

    #[test]
    fn test_detail_without_key_column_is_rejected() {
        let mut table = make_table();
        table.detail_table_name = Some("OrderLine".into());
        let columns = vec![make_column("Name", "string", 0)];

        let err = render_attribute_block(&table, &columns, Dialect::SqlServer).unwrap_err();
        assert!(matches!(err, CodegenError::MalformedInput(_)));
        assert!(err.to_string().contains("OrderLine"));
    }

    #[test]
    fn test_blocks_use_crlf() {
        let table = make_table();
        let block =
            render_attribute_block(&table, &[make_column("A", "int", 0)], Dialect::SqlServer)
                .unwrap();
        assert!(block.contains("\r\n"));
        assert!(!block.replace("\r\n", "").contains('\n'));
    }
}
