//! Target SQL dialects and generator selection.

use super::{GenerateError, MySqlGenerator, OracleGenerator, PostgresGenerator, SqlGenerator};

/// SQL dialect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL / MariaDB (InnoDB)
    MySql,
    /// PostgreSQL
    Postgres,
    /// Oracle Database
    Oracle,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Self::MySql, Self::Postgres, Self::Oracle];

    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Some(Self::MySql),
            "postgres" | "postgresql" => Some(Self::Postgres),
            "oracle" => Some(Self::Oracle),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Oracle => "oracle",
        }
    }

    pub fn generator(self) -> Box<dyn SqlGenerator> {
        match self {
            Self::MySql => Box::new(MySqlGenerator),
            Self::Postgres => Box::new(PostgresGenerator),
            Self::Oracle => Box::new(OracleGenerator),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the generator for `dialect`. The set is closed, so the only
/// failure is an absent dialect.
pub fn select(dialect: Option<Dialect>) -> Result<Box<dyn SqlGenerator>, GenerateError> {
    dialect
        .map(Dialect::generator)
        .ok_or(GenerateError::InvalidInput("Dialect cannot be null"))
}
