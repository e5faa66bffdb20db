use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: Uuid },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// `context` names the repository call and the step that failed,
    /// e.g. `blogs.delete.rows_affected`.
    #[error("Storage error in {context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl DomainError {
    pub fn storage(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
