use thiserror::Error;

/// Failures surfaced by the mappers. A query that matches nothing is not one
/// of these; finders report that as `None`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("could not open database {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

impl DatabaseError {
    /// True when the database rejected a statement, e.g. a foreign key or
    /// NOT NULL violation.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            DatabaseError::Query(sqlx::Error::Database(e)) => {
                e.message().contains("constraint failed")
            }
            _ => false,
        }
    }
}
