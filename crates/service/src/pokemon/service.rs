use std::sync::Arc;

use tracing::{error, info, instrument};
use uuid::Uuid;

use models::pokemon::{normalize_name, validate_attributes, validate_name};

use super::domain::{CreatePokemonInput, DeletedPokemon, NewPokemon, Pokemon, PokemonPatch, UpdatePokemonInput};
use super::repository::{PokemonRepository, StoreError};
use crate::errors::ServiceError;

/// Pokemon business service, independent of web framework and storage.
/// Stateless: every call is one request against the injected store.
pub struct PokemonService<R: PokemonRepository + ?Sized> {
    repo: Arc<R>,
}

/// Re-classify a store failure. Conflicts keep their detail; anything else is
/// logged here and replaced by `public`.
fn classify(err: StoreError, public: &str) -> ServiceError {
    match err {
        StoreError::Conflict { fields } => ServiceError::DuplicateKey { fields },
        StoreError::Backend(cause) => {
            error!(error = %cause, "{public}");
            ServiceError::Internal(public.to_string())
        }
    }
}

impl<R: PokemonRepository + ?Sized> PokemonService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a pokemon; the name is stored lowercase.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::pokemon::{PokemonService, CreatePokemonInput, repo::memory::MemoryPokemonRepository};
    /// let svc = PokemonService::new(Arc::new(MemoryPokemonRepository::new()));
    /// let input: CreatePokemonInput = serde_json::from_value(serde_json::json!({"name": "Pikachu", "no": 25})).unwrap();
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.name, "pikachu");
    /// assert_eq!(created.attributes["no"], 25);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreatePokemonInput) -> Result<Pokemon, ServiceError> {
        // lowercasing can lengthen a name, so the stored form is what gets checked
        let name = normalize_name(&input.name);
        validate_name(&name)?;
        validate_attributes(&input.attributes)?;
        let doc = NewPokemon { name, attributes: input.attributes };

        let created = self
            .repo
            .create(doc)
            .await
            .map_err(|e| classify(e, "cannot create pokemon - check server logs"))?;
        info!(id = %created.id, name = %created.name, "pokemon_created");
        Ok(created)
    }

    /// All pokemon in store order. Unpaginated.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Pokemon>, ServiceError> {
        self.repo
            .find()
            .await
            .map_err(|e| classify(e, "cannot list pokemon - check server logs"))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Pokemon, ServiceError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| classify(e, "cannot read pokemon - check server logs"))?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Partial update: only the supplied fields change. A supplied name is
    /// lowercased and validated like on create.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdatePokemonInput) -> Result<Pokemon, ServiceError> {
        let name = input.name.as_deref().map(normalize_name);
        if let Some(name) = &name {
            validate_name(name)?;
        }
        validate_attributes(&input.attributes)?;
        let patch = PokemonPatch { name, attributes: input.attributes };

        let updated = self
            .repo
            .find_by_id_and_update(id, patch)
            .await
            .map_err(|e| classify(e, "cannot update pokemon - check server logs"))?
            .ok_or_else(|| ServiceError::not_found(id))?;
        info!(id = %updated.id, name = %updated.name, "pokemon_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<DeletedPokemon, ServiceError> {
        let deleted = self
            .repo
            .find_by_id_and_delete(id)
            .await
            .map_err(|e| classify(e, "cannot delete pokemon - check server logs"))?
            .ok_or_else(|| ServiceError::not_found(id))?;
        info!(id = %id, name = %deleted.name, "pokemon_deleted");
        Ok(DeletedPokemon {
            message: format!("pokemon with id {id} was deleted successfully"),
            deleted_pokemon: deleted,
        })
    }
}
