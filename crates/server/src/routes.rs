use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::pokemon::{PokemonRepository, PokemonService};

use crate::openapi::ApiDoc;

pub mod pokemon;

/// Shared handler state. The service is stateless, so cloning is an `Arc` bump.
#[derive(Clone)]
pub struct ServerState {
    pub pokemon: Arc<PokemonService<dyn PokemonRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { pokemon: Arc::new(PokemonService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, pokemon resource and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/pokemon", get(pokemon::list).post(pokemon::create))
        .route(
            "/api/pokemon/:id",
            get(pokemon::get).patch(pokemon::update).delete(pokemon::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
