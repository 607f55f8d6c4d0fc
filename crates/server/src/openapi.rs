use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

// Documentation-only shapes. Real payloads also carry any extra attributes
// the client sent; those are flattened next to `name`.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PokemonDoc {
    pub id: Uuid,
    /// Always lowercase
    pub name: String,
    /// Example pass-through attribute
    pub no: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreatePokemonDoc {
    pub name: String,
    pub no: Option<i64>,
}

#[derive(ToSchema)]
pub struct UpdatePokemonDoc {
    pub name: Option<String>,
    pub no: Option<i64>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct DeletedPokemonDoc {
    pub message: String,
    pub deletedPokemon: PokemonDoc,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pokemon::create,
        crate::routes::pokemon::list,
        crate::routes::pokemon::get,
        crate::routes::pokemon::update,
        crate::routes::pokemon::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PokemonDoc,
            CreatePokemonDoc,
            UpdatePokemonDoc,
            DeletedPokemonDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pokemon")
    )
)]
pub struct ApiDoc;
