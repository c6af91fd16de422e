//! Per-dialect column type adjustments.

use super::Dialect;
use crate::ast::Column;
use std::borrow::Cow;

/// Map a declared column type to the type emitted for `dialect`.
pub fn map_type(column: &Column, dialect: Dialect) -> Cow<'_, str> {
    match dialect {
        Dialect::MySql => Cow::Borrowed(&column.typ),
        Dialect::Postgres => map_postgres_type(column),
        Dialect::Oracle => map_oracle_type(&column.typ),
    }
}

fn map_postgres_type(column: &Column) -> Cow<'_, str> {
    // Key-like columns become auto-incrementing, whatever they declared
    if column.is_key_like() {
        Cow::Borrowed("SERIAL")
    } else {
        Cow::Borrowed(&column.typ)
    }
}

fn map_oracle_type(typ: &str) -> Cow<'_, str> {
    const VARCHAR: &str = "VARCHAR";

    match typ.get(..VARCHAR.len()) {
        Some(head) if head.eq_ignore_ascii_case(VARCHAR) => {
            let rest = &typ[VARCHAR.len()..];
            if rest.starts_with('2') {
                Cow::Borrowed(typ)
            } else {
                Cow::Owned(format!("VARCHAR2{rest}"))
            }
        }
        _ => Cow::Borrowed(typ),
    }
}
