use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::pokemon::domain::{NewPokemon, Pokemon, PokemonPatch};
use crate::pokemon::repository::{PokemonRepository, StoreError};

/// In-process store keeping records in insertion order. Enforces the same
/// unique-name rule as the database index.
#[derive(Default)]
pub struct MemoryPokemonRepository {
    records: RwLock<Vec<Pokemon>>,
}

impl MemoryPokemonRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize { self.records.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.records.read().await.is_empty() }
}

#[async_trait]
impl PokemonRepository for MemoryPokemonRepository {
    async fn create(&self, doc: NewPokemon) -> Result<Pokemon, StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|p| p.name == doc.name) {
            return Err(StoreError::name_conflict(&doc.name));
        }
        let now = Utc::now();
        let created = Pokemon {
            id: Uuid::new_v4(),
            name: doc.name,
            attributes: doc.attributes,
            created_at: now,
            updated_at: now,
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn find(&self) -> Result<Vec<Pokemon>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError> {
        Ok(self.records.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_id_and_update(&self, id: Uuid, patch: PokemonPatch) -> Result<Option<Pokemon>, StoreError> {
        let mut records = self.records.write().await;
        let Some(idx) = records.iter().position(|p| p.id == id) else { return Ok(None) };
        if let Some(name) = &patch.name {
            if records.iter().any(|p| p.id != id && &p.name == name) {
                return Err(StoreError::name_conflict(name));
            }
        }
        let target = &mut records[idx];
        patch.apply_to(target);
        target.updated_at = Utc::now();
        Ok(Some(target.clone()))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError> {
        let mut records = self.records.write().await;
        let Some(idx) = records.iter().position(|p| p.id == id) else { return Ok(None) };
        Ok(Some(records.remove(idx)))
    }
}
