use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use service::pokemon::{CreatePokemonInput, DeletedPokemon, Pokemon, UpdatePokemonInput};

use crate::{errors::JsonApiError, extract::ApiJson, routes::ServerState};

#[utoipa::path(
    post, path = "/api/pokemon", tag = "pokemon",
    request_body = crate::openapi::CreatePokemonDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PokemonDoc),
        (status = 400, description = "Validation Error or Duplicate Key", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<CreatePokemonInput>,
) -> Result<(StatusCode, Json<Pokemon>), JsonApiError> {
    let created = state.pokemon.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/pokemon", tag = "pokemon",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::PokemonDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Pokemon>>, JsonApiError> {
    let all = state.pokemon.list().await?;
    info!(count = all.len(), "list pokemon");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/pokemon/{id}", tag = "pokemon",
    params(("id" = Uuid, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PokemonDoc),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<Pokemon>, JsonApiError> {
    Ok(Json(state.pokemon.get(id).await?))
}

#[utoipa::path(
    patch, path = "/api/pokemon/{id}", tag = "pokemon",
    params(("id" = Uuid, Path, description = "Pokemon ID")),
    request_body = crate::openapi::UpdatePokemonDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PokemonDoc),
        (status = 400, description = "Validation Error or Duplicate Key", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ApiJson(input): ApiJson<UpdatePokemonInput>,
) -> Result<Json<Pokemon>, JsonApiError> {
    Ok(Json(state.pokemon.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/pokemon/{id}", tag = "pokemon",
    params(("id" = Uuid, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedPokemonDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<DeletedPokemon>, JsonApiError> {
    Ok(Json(state.pokemon.delete(id).await?))
}
