//! MySQL DDL: unquoted identifiers, InnoDB tables, foreign key checks
//! switched off around the whole script.

use super::{Dialect, SqlGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGenerator;

impl SqlGenerator for MySqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn create_prefix(&self) -> &'static str {
        "CREATE TABLE IF NOT EXISTS"
    }

    fn table_trailer(&self) -> &'static str {
        ") ENGINE=InnoDB;"
    }

    fn placeholder_type(&self) -> &'static str {
        "INT"
    }

    fn preamble(&self) -> &'static str {
        "SET FOREIGN_KEY_CHECKS=0;\n\n"
    }

    fn postamble(&self) -> &'static str {
        "SET FOREIGN_KEY_CHECKS=1;\n"
    }
}
