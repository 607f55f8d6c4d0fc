use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use models::errors::ModelError;

/// Failures surfaced by the service layer. The request layer maps
/// `Validation`/`DuplicateKey` to client errors, `NotFound` to a missing
/// resource and `Internal` to an opaque server failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("pokemon already exists in db {}", render_fields(.fields))]
    DuplicateKey { fields: BTreeMap<String, Value> },
    #[error("no pokemon found with id {id}")]
    NotFound { id: Uuid },
    /// Public message only; the underlying cause is logged where it happened.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(id: Uuid) -> Self { Self::NotFound { id } }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

fn render_fields(fields: &BTreeMap<String, Value>) -> String {
    serde_json::to_string(fields).unwrap_or_else(|_| format!("{fields:?}"))
}
