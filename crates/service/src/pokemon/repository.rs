use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::domain::{NewPokemon, Pokemon, PokemonPatch};

/// Failures reported by a pokemon store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {fields:?}")]
    Conflict { fields: BTreeMap<String, Value> },
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn name_conflict(name: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        Self::Conflict { fields }
    }
}

/// Document-store style persistence for pokemon. Misses are `Ok(None)`,
/// never errors.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    async fn create(&self, doc: NewPokemon) -> Result<Pokemon, StoreError>;
    async fn find(&self) -> Result<Vec<Pokemon>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError>;
    /// Apply `patch` and return the record as it is after the update.
    async fn find_by_id_and_update(&self, id: Uuid, patch: PokemonPatch) -> Result<Option<Pokemon>, StoreError>;
    /// Remove the record and return it as it was before removal.
    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError>;
}
