//! Schema description parsers (JSON and XML) and format selection.

mod json;
mod xml;

pub use json::JsonParser;
pub use xml::XmlParser;

use crate::ast::Schema;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Schema file cannot be null")]
    NoFile,
    #[error("Schema file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Top-level JSON must be an array of table definitions")]
    NotAnArray,
    #[error("Missing 'tableName' in one of the table definitions")]
    MissingTableName,
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Root element <schema> is required, found <{0}>")]
    RootNotSchema(String),
    #[error("Each <table> must have a non-empty 'name' attribute")]
    MissingTableAttr,
    #[error("Each <column> in table '{table}' must have a non-empty 'name' attribute")]
    MissingColumnName { table: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Format cannot be null")]
    Missing,
    #[error("Unsupported format: {0}")]
    Unsupported(String),
}

/// A parser turning one input syntax into a [`Schema`].
///
/// Implementations are stateless; every call builds a fresh schema.
pub trait SchemaParser {
    fn format(&self) -> Format;

    /// Parse an in-memory document.
    fn parse_str(&self, input: &str) -> Result<Schema, ParseError>;

    /// Parse the file at `path`. The path is recorded in the schema
    /// metadata under `source`.
    fn parse(&self, path: Option<&Path>) -> Result<Schema, ParseError> {
        let path = path.ok_or_else(|| {
            tracing::error!("no schema file given");
            ParseError::NoFile
        })?;
        tracing::info!(path = %path.display(), format = %self.format(), "parsing schema file");

        if !path.exists() {
            tracing::error!(path = %path.display(), "schema file does not exist");
            return Err(ParseError::FileNotFound(path.to_path_buf()));
        }
        let input = fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), %source, "failed to read schema file");
            ParseError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut schema = self.parse_str(&input)?;
        schema.put("source", path.display().to_string());
        Ok(schema)
    }
}

/// Input syntax variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Case-insensitive lookup of a format label.
    pub fn from_label(label: Option<&str>) -> Result<Self, FormatError> {
        let label = label.ok_or(FormatError::Missing)?;
        match label.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(FormatError::Unsupported(label.to_string())),
        }
    }

    /// Guess the format from a file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    pub fn parser(self) -> Box<dyn SchemaParser> {
        match self {
            Self::Json => Box::new(JsonParser),
            Self::Xml => Box::new(XmlParser),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the parser for a format label such as `"json"` or `"XML"`.
pub fn select(label: Option<&str>) -> Result<Box<dyn SchemaParser>, FormatError> {
    Format::from_label(label).map(Format::parser)
}

/// Trimmed-blank check shared by both parsers.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
