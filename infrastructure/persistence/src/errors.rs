use business::domain::errors::RepositoryError;
use sqlx::error::ErrorKind;

/// Logs the driver error and collapses it into the port's error type.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::RowNotFound = error {
        return RepositoryError::NotFound;
    }

    let kind = error.as_database_error().map(|db_error| db_error.kind());
    tracing::error!(error = %error, "database operation failed");

    match kind {
        Some(ErrorKind::UniqueViolation) => RepositoryError::Duplicated,
        Some(ErrorKind::CheckViolation) => RepositoryError::ConstraintViolated,
        _ => RepositoryError::DatabaseError,
    }
}
