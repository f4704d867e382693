use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Invalid result type '{0}': must be win, loss, or draw")]
    InvalidResultType(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
