use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Translate a unique violation raised by an insert into a Conflict with a
    /// domain message instead of leaking the SQL state to the caller.
    pub fn map_unique_violation(error: sqlx::Error, message: &str) -> StorageError {
        if let sqlx::Error::Database(ref db_err) = error {
            if db_err.code().as_deref() == Some("23505") {
                return StorageError::ConstraintViolation(message.to_string());
            }
        }
        StorageError::from(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_unique_violation_passes_through_other_errors() {
        let err = StorageError::map_unique_violation(sqlx::Error::RowNotFound, "duplicate entry");
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
    }
}
