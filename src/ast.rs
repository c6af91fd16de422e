//! In-memory schema model shared by the parsers and the SQL generators.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Column type used when the source document does not declare one.
pub const DEFAULT_COLUMN_TYPE: &str = "VARCHAR(255)";

/// Column-name suffix that marks a primary key candidate.
pub const KEY_SUFFIX: &str = "_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Origin tag, e.g. "JSON Schema" or "XML Schema"
    pub label: String,
    pub tables: Vec<Table>,
    pub metadata: BTreeMap<String, Value>,
    /// Most recently parsed sub-schema, kept for load -> edit -> regenerate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Box<Schema>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: String,
}

/// A declared relationship. Only `many-to-one` produces DDL; the rest is
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub relationship_type: Option<String>,
    pub related_table: Option<String>,
    pub through_table: Option<String>,
    pub foreign_key: Option<String>,
    pub related_foreign_key: Option<String>,
}

impl Schema {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_tables(label: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            label: label.into(),
            tables,
            ..Self::default()
        }
    }

    pub fn set_tables(&mut self, tables: Vec<Table>) {
        tracing::debug!(count = tables.len(), "tables set");
        self.tables = tables;
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn set_parsed_schema(&mut self, schema: Schema) {
        self.parsed = Some(Box::new(schema));
    }

    pub fn parsed_schema(&self) -> Option<&Schema> {
        self.parsed.as_deref()
    }

    pub fn parsed_schema_mut(&mut self) -> Option<&mut Schema> {
        self.parsed.as_deref_mut()
    }

    /// Rename and retype the column at `index` of the first table named
    /// `table_name`.
    ///
    /// Unknown tables and out-of-range indexes leave the schema unchanged and
    /// return `false`; no error is raised. The new name and type are stored
    /// as given.
    pub fn update_column(
        &mut self,
        table_name: &str,
        index: usize,
        new_name: &str,
        new_type: &str,
    ) -> bool {
        let Some(table) = self.tables.iter_mut().find(|t| t.name == table_name) else {
            tracing::warn!(table = table_name, "column update ignored: no such table");
            return false;
        };

        match table.columns.get_mut(index) {
            Some(column) => {
                column.name = new_name.to_string();
                column.typ = new_type.to_string();
                true
            }
            None => {
                tracing::warn!(
                    table = table_name,
                    index,
                    columns = table.columns.len(),
                    "column update ignored: index out of range"
                );
                false
            }
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schema{{label='{}', tables={}, metadata={}}}",
            self.label,
            self.tables.len(),
            self.metadata.len()
        )
    }
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            relationships: vec![],
        }
    }

    /// First column whose name ends in `_id`. Tables without one have no
    /// primary key.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_key_like())
    }
}

impl Column {
    pub fn new(name: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typ: typ.into(),
        }
    }

    /// Column with the default `VARCHAR(255)` type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_COLUMN_TYPE)
    }

    pub fn is_key_like(&self) -> bool {
        self.name.ends_with(KEY_SUFFIX)
    }
}

impl Relationship {
    pub fn many_to_one(
        foreign_key: impl Into<String>,
        related_table: impl Into<String>,
        related_foreign_key: Option<String>,
    ) -> Self {
        Self {
            relationship_type: Some("many-to-one".to_string()),
            related_table: Some(related_table.into()),
            through_table: None,
            foreign_key: Some(foreign_key.into()),
            related_foreign_key,
        }
    }

    pub fn is_many_to_one(&self) -> bool {
        self.relationship_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("many-to-one"))
    }

    /// Referenced column, `id` when blank or absent.
    pub fn related_key(&self) -> &str {
        match self.related_foreign_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => "id",
        }
    }
}
