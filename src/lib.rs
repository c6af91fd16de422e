pub mod ast;
pub mod error;
pub mod parser;
pub mod sql;

use std::path::Path;

use wasm_bindgen::prelude::*;

pub use ast::{Column, Relationship, Schema, Table};
pub use error::{Error, Result};
pub use parser::{Format, SchemaParser};
pub use sql::{Dialect, SqlGenerator};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Parse the schema file at `path` with the parser for `format`.
pub fn parse(path: Option<&Path>, format: Option<&str>) -> Result<Schema> {
    let parser = parser::select(format)?;
    Ok(parser.parse(path)?)
}

/// Generate DDL for `schema` in `dialect`.
pub fn generate(schema: Option<&Schema>, dialect: Option<Dialect>) -> Result<String> {
    let generator = sql::select(dialect)?;
    let sql = generator.generate(schema)?;

    if sql.is_empty() {
        tracing::warn!(dialect = %generator.dialect(), "generation produced no SQL");
    } else {
        tracing::info!(chars = sql.len(), "generation finished");
        let preview: String = sql.chars().take(100).collect();
        tracing::debug!(%preview, "SQL preview");
    }
    Ok(sql)
}

/// Render JSON or XML schema source to SQL DDL
#[wasm_bindgen(js_name = "schemaToSql")]
pub fn schema_to_sql(source: &str, format: &str, dialect: &str) -> std::result::Result<String, String> {
    let parser = parser::select(Some(format)).map_err(|e| e.to_string())?;
    let dialect = Dialect::from_str(dialect).ok_or_else(|| format!("Unsupported dialect: {dialect}"))?;
    let schema = parser.parse_str(source).map_err(|e| e.to_string())?;
    generate(Some(&schema), Some(dialect)).map_err(|e| e.to_string())
}
