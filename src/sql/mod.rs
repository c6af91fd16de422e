//! Schema to SQL DDL generation.
//!
//! Every dialect shares one algorithm: per table a `CREATE TABLE` with the
//! columns in declared order, a `PRIMARY KEY` on the first `_id` column and a
//! `FOREIGN KEY` per many-to-one relationship. Dialects differ only in
//! quoting, statement framing and column types (see [`types`]).

mod dialect;
mod mysql;
mod oracle;
mod postgres;
mod types;

pub use dialect::{Dialect, select};
pub use mysql::MySqlGenerator;
pub use oracle::OracleGenerator;
pub use postgres::PostgresGenerator;
pub use types::map_type;

use crate::ast::{Schema, Table};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

pub trait SqlGenerator {
    fn dialect(&self) -> Dialect;

    /// Leading `CREATE TABLE ...` keywords, without the table name.
    fn create_prefix(&self) -> &'static str;

    /// Closing line of each `CREATE TABLE` statement.
    fn table_trailer(&self) -> &'static str;

    /// Type of the `id` column emitted for tables without columns.
    fn placeholder_type(&self) -> &'static str;

    fn quote<'a>(&self, ident: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(ident)
    }

    fn preamble(&self) -> &'static str {
        ""
    }

    fn postamble(&self) -> &'static str {
        ""
    }

    /// Generate DDL for `schema`. An absent schema is an error; a schema
    /// without tables yields only the dialect's framing.
    fn generate(&self, schema: Option<&Schema>) -> Result<String, GenerateError> {
        match schema {
            Some(schema) => Ok(self.render(schema)),
            None => {
                tracing::error!(dialect = %self.dialect(), "received no schema");
                Err(GenerateError::InvalidInput("Schema cannot be null"))
            }
        }
    }

    fn render(&self, schema: &Schema) -> String {
        tracing::info!(dialect = %self.dialect(), tables = schema.tables.len(), "generating DDL");

        let mut output = String::from(self.preamble());
        if schema.tables.is_empty() {
            tracing::warn!("no tables in schema");
        }

        for table in &schema.tables {
            if table.name.trim().is_empty() {
                tracing::warn!("skipping table with missing name");
                continue;
            }
            tracing::debug!(table = %table.name, "generating table");
            write_table(self, &mut output, table);
        }

        output.push_str(self.postamble());
        output
    }
}

fn write_table<G: SqlGenerator + ?Sized>(generator: &G, output: &mut String, table: &Table) {
    let dialect = generator.dialect();
    let mut lines = Vec::with_capacity(table.columns.len() + table.relationships.len() + 1);

    if table.columns.is_empty() {
        tracing::warn!(table = %table.name, "table has no columns; adding placeholder id");
        lines.push(format!("id {}", generator.placeholder_type()));
    }
    for column in &table.columns {
        lines.push(format!(
            "{} {}",
            generator.quote(&column.name),
            map_type(column, dialect)
        ));
    }

    if let Some(pk) = table.primary_key() {
        lines.push(format!("PRIMARY KEY ({})", generator.quote(&pk.name)));
    }

    for rel in table.relationships.iter().filter(|r| r.is_many_to_one()) {
        let fk = rel.foreign_key.as_deref().filter(|s| !s.trim().is_empty());
        let target = rel.related_table.as_deref().filter(|s| !s.trim().is_empty());
        let (Some(fk), Some(target)) = (fk, target) else {
            tracing::warn!(table = %table.name, "many-to-one relationship without foreignKey or relatedTable; ignored");
            continue;
        };
        lines.push(format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            generator.quote(fk),
            generator.quote(target),
            generator.quote(rel.related_key())
        ));
    }

    output.push_str(&format!(
        "{} {} (\n  ",
        generator.create_prefix(),
        generator.quote(&table.name)
    ));
    output.push_str(&lines.join(",\n  "));
    output.push('\n');
    output.push_str(generator.table_trailer());
    output.push_str("\n\n");
}
