use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
