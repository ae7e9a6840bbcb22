use thiserror::Error;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

/// Error type for all database operations. Unique-constraint violations are
/// split out with their constraint name so callers can tell a duplicate
/// listing from a reference-code collision and react differently.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("unique constraint {0} violated")]
    UniqueViolation(String),
    #[error(transparent)]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                let constraint = db_err.constraint().unwrap_or_default().to_string();
                return DbError::UniqueViolation(constraint);
            }
        }
        DbError::Db(err)
    }
}

impl DbError {
    /// True if this is a unique violation on the named constraint.
    pub fn violates(&self, constraint: &str) -> bool {
        matches!(self, DbError::UniqueViolation(name) if name == constraint)
    }
}
