use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("project '{0}' not found or not accessible")]
    ProjectInaccessible(String),
    #[error("{failed} of {total} issues failed to create")]
    BatchFailed { failed: usize, total: usize },
}

pub type AppResult<T> = Result<T, AppError>;
