/// Errors crossing the persistence ports.
/// Display strings are code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    /// A check constraint rejected the write, e.g. stock dropping below zero.
    #[error("repository.constraint_violated")]
    ConstraintViolated,
    #[error("repository.database_error")]
    DatabaseError,
}
