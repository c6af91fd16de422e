//! Oracle DDL: plain `CREATE TABLE`, `VARCHAR` widened to `VARCHAR2`.

use super::{Dialect, SqlGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleGenerator;

impl SqlGenerator for OracleGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn create_prefix(&self) -> &'static str {
        "CREATE TABLE"
    }

    fn table_trailer(&self) -> &'static str {
        ");"
    }

    fn placeholder_type(&self) -> &'static str {
        "NUMBER"
    }
}
