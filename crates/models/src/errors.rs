use thiserror::Error;

/// Field-level rule violations detected before anything reaches the database.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}
