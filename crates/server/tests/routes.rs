use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::pokemon::repo::memory::MemoryPokemonRepository;
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn app() -> Router {
    let state = ServerState::new(Arc::new(MemoryPokemonRepository::new()));
    routes::build_router(state, tower_http::cors::CorsLayer::very_permissive())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn blank_name_is_a_validation_error() {
    let res = app().oneshot(json_request("POST", "/api/pokemon", json!({"name": "   "}))).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "Validation Error");
}

#[tokio::test]
async fn reserved_attribute_is_a_validation_error() {
    let res = app()
        .oneshot(json_request("POST", "/api/pokemon", json!({"name": "mew", "created_at": "now"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_name_is_a_validation_error() {
    let res = app().oneshot(json_request("POST", "/api/pokemon", json!({"no": 1}))).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Validation Error");
    assert!(body["message"].as_str().is_some_and(|m| m.contains("name")));
}

#[tokio::test]
async fn malformed_bodies_use_the_error_shape() {
    let wrong_type = json_request("POST", "/api/pokemon", json!({"name": 5}));
    let not_json = Request::builder()
        .method("POST")
        .uri("/api/pokemon")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let no_content_type = Request::builder()
        .method("POST")
        .uri("/api/pokemon")
        .body(Body::from(json!({"name": "ditto"}).to_string()))
        .unwrap();

    for req in [wrong_type, not_json, no_content_type] {
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["error"], "Validation Error");
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn patch_with_wrong_types_is_a_validation_error() {
    // the body is decoded before the id is looked up
    let id = "0b6d0c8e-58f4-4c3c-9f0a-6d2e4f1a9b11";
    let res = app()
        .oneshot(json_request("PATCH", &format!("/api/pokemon/{id}"), json!({"name": ["a"]})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "Validation Error");
}

#[tokio::test]
async fn list_starts_empty() {
    let req = Request::builder().uri("/api/pokemon").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn openapi_document_lists_pokemon_paths() {
    let req = Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await;
    assert!(doc["paths"].get("/api/pokemon").is_some());
    assert!(doc["paths"].get("/api/pokemon/{id}").is_some());
}
