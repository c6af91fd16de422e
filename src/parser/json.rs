//! JSON schema descriptions.
//!
//! The document is an array of table objects:
//!
//! ```json
//! [{ "tableName": "users",
//!    "columns": [{ "name": "user_id", "type": "INT" }],
//!    "relationships": [{ "relationshipType": "many-to-one", "relatedTable": "departments",
//!                        "foreignKey": "dept_id" }] }]
//! ```

use super::{Format, ParseError, SchemaParser, is_blank};
use crate::ast::{Column, DEFAULT_COLUMN_TYPE, Relationship, Schema, Table};
use serde_json::Value;

pub const LABEL: &str = "JSON Schema";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl SchemaParser for JsonParser {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse_str(&self, input: &str) -> Result<Schema, ParseError> {
        // Editors on Windows like to prepend a byte-order mark
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let root: Value = serde_json::from_str(input).map_err(|e| {
            tracing::error!(error = %e, "malformed JSON schema");
            ParseError::Json(e)
        })?;

        let Value::Array(entries) = root else {
            tracing::error!("top-level JSON is not an array");
            return Err(ParseError::NotAnArray);
        };

        let tables = entries
            .iter()
            .map(parse_table)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(tables = tables.len(), "parsed JSON schema");
        Ok(Schema::with_tables(LABEL, tables))
    }
}

fn parse_table(node: &Value) -> Result<Table, ParseError> {
    let name = match text(node, "tableName") {
        Some(name) if !is_blank(&name) => name,
        _ => {
            tracing::error!("table definition without tableName");
            return Err(ParseError::MissingTableName);
        }
    };
    tracing::debug!(table = %name, "parsing table");

    let columns = items(node, "columns")
        .map(|col| Column {
            name: text(col, "name").unwrap_or_default(),
            typ: text(col, "type").unwrap_or_else(|| DEFAULT_COLUMN_TYPE.to_string()),
        })
        .collect();

    // Absent keys stay `None` here; the XML reader yields empty strings.
    let relationships = items(node, "relationships")
        .map(|rel| Relationship {
            relationship_type: text(rel, "relationshipType"),
            related_table: text(rel, "relatedTable"),
            through_table: text(rel, "throughTable"),
            foreign_key: text(rel, "foreignKey"),
            related_foreign_key: text(rel, "relatedForeignKey"),
        })
        .collect();

    Ok(Table {
        name,
        columns,
        relationships,
    })
}

/// Elements of the array under `key`; anything else reads as empty.
fn items<'a>(node: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    node.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// Scalar under `key` rendered as text. Missing keys and `null` are `None`.
fn text(node: &Value, key: &str) -> Option<String> {
    match node.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(String::new()),
    }
}
