//! Crate-level error for the parse -> generate pipeline.

use crate::parser::{FormatError, ParseError};
use crate::sql::GenerateError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    UnsupportedFormat(#[from] FormatError),
    #[error(transparent)]
    InvalidInput(#[from] GenerateError),
}
