//! PostgreSQL DDL: double-quoted identifiers, `_id` columns become `SERIAL`.

use super::{Dialect, SqlGenerator};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresGenerator;

impl SqlGenerator for PostgresGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn create_prefix(&self) -> &'static str {
        "CREATE TABLE IF NOT EXISTS"
    }

    fn table_trailer(&self) -> &'static str {
        ");"
    }

    fn placeholder_type(&self) -> &'static str {
        "SERIAL"
    }

    fn quote<'a>(&self, ident: &'a str) -> Cow<'a, str> {
        Cow::Owned(format!("\"{}\"", ident.replace('"', "\"\"")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Schema, Table};
    use crate::sql::tests::{employees_schema, users_schema};

    #[test]
    fn test_generate_users() {
        let sql = PostgresGenerator.render(&users_schema());
        let expected = "CREATE TABLE IF NOT EXISTS \"users\" (\n  \
            \"user_id\" SERIAL,\n  \
            \"name\" VARCHAR(50),\n  \
            PRIMARY KEY (\"user_id\")\n\
            );\n\n";
        assert_eq!(sql, expected);
    }

    #[test]
    fn test_generate_empty_schema() {
        assert_eq!(PostgresGenerator.render(&Schema::new("empty")), "");
    }

    #[test]
    fn test_placeholder_column() {
        let sql = PostgresGenerator.render(&Schema::with_tables("t", vec![Table::new("logs")]));
        assert!(sql.contains("id SERIAL"));
        assert!(!sql.contains("PRIMARY KEY"));
    }

    #[test]
    fn test_foreign_key_quoted() {
        let sql = PostgresGenerator.render(&employees_schema());
        assert!(sql.contains("\"emp_id\" SERIAL"));
        assert!(sql.contains("\"dept_id\" SERIAL"));
        assert!(sql.contains("PRIMARY KEY (\"emp_id\")"));
        assert!(sql.contains("FOREIGN KEY (\"dept_id\") REFERENCES \"departments\"(\"id\")"));
    }

    #[test]
    fn test_quote_escapes_embedded_quotes() {
        assert_eq!(PostgresGenerator.quote("we\"ird"), "\"we\"\"ird\"");
    }
}
