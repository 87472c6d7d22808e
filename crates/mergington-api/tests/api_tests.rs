//! Integration tests for the activities API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test builds its own directory, so state
//! never leaks between tests.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use indexmap::IndexMap;
use mergington_api::router::build_router;
use mergington_api::state::AppState;
use mergington_core::{ActivityDirectory, seed_activities};
use mergington_types::{Activity, ActivityCatalog};
use serde_json::Value;
use tower::ServiceExt;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

fn seeded_state() -> Arc<AppState> {
    Arc::new(AppState::new(ActivityDirectory::seeded(), static_dir()))
}

fn small_state() -> Arc<AppState> {
    let mut chess = Activity::new("Chess club", "Fridays", 12);
    chess.participants = vec![
        "a@mergington.edu".to_owned(),
        "b@mergington.edu".to_owned(),
        "c@mergington.edu".to_owned(),
    ];
    let mut catalog = ActivityCatalog::new();
    catalog.insert("Chess".to_owned(), chess);
    Arc::new(AppState::new(ActivityDirectory::new(catalog), static_dir()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_root_redirects_to_landing_page() {
    let router = build_router(seeded_state());

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/static/index.html");
}

#[tokio::test]
async fn test_landing_page_is_served() {
    let router = build_router(seeded_state());

    let response = router.oneshot(get("/static/index.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_list_activities_returns_seed_catalog() {
    let router = build_router(seeded_state());

    let (status, json) = send(&router, get("/activities")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_object().unwrap().len(), 9);
    assert_eq!(json["Futebol"]["max_participants"], 22);
    assert_eq!(
        json["Clube de Xadrez"]["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
    assert_eq!(json["Teatro"]["schedule"], "Segundas e quartas, 16h - 17h30");
}

#[tokio::test]
async fn test_list_activities_keeps_seed_order() {
    let router = build_router(seeded_state());

    let response = router.oneshot(get("/activities")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("application/json"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let served: IndexMap<String, Value> = serde_json::from_slice(&bytes).unwrap();
    let served_names: Vec<&String> = served.keys().collect();
    let seed = seed_activities();
    let seed_names: Vec<&String> = seed.keys().collect();
    assert_eq!(served_names, seed_names);
}

#[tokio::test]
async fn test_signup_then_list_shows_participant_appended() {
    let router = build_router(seeded_state());

    let (status, json) = send(
        &router,
        post("/activities/Futebol/signup?email=new@mergington.edu"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "new@mergington.edu inscrito(a) em Futebol com sucesso"
    );

    let (_, json) = send(&router, get("/activities")).await;
    assert_eq!(
        json["Futebol"]["participants"],
        serde_json::json!([
            "lucas@mergington.edu",
            "marcos@mergington.edu",
            "new@mergington.edu"
        ])
    );
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected() {
    let state = seeded_state();
    let router = build_router(Arc::clone(&state));

    let uri = "/activities/Futebol/signup?email=new@mergington.edu";
    let (status, _) = send(&router, post(uri)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&router, post(uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Estudante já inscrito nesta atividade");
    assert_eq!(json["status"], 400);

    let directory = state.directory.read().await;
    let futebol = directory.get("Futebol").unwrap();
    assert_eq!(futebol.participants.len(), 3);
}

#[tokio::test]
async fn test_signup_seeded_participant_is_rejected() {
    let router = build_router(seeded_state());

    let (status, _) = send(
        &router,
        post("/activities/Futebol/signup?email=lucas%40mergington.edu"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_unknown_activity_is_404() {
    let router = build_router(seeded_state());

    let (status, json) = send(
        &router,
        post("/activities/Rob%C3%B3tica/signup?email=x@mergington.edu"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Atividade não encontrada");
}

#[tokio::test]
async fn test_signup_percent_encoded_name() {
    let state = seeded_state();
    let router = build_router(Arc::clone(&state));

    let (status, json) = send(
        &router,
        post("/activities/Educa%C3%A7%C3%A3o%20F%C3%ADsica/signup?email=x%40mergington.edu"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "x@mergington.edu inscrito(a) em Educação Física com sucesso"
    );

    let directory = state.directory.read().await;
    assert!(directory
        .get("Educação Física")
        .unwrap()
        .has_participant("x@mergington.edu"));
}

#[tokio::test]
async fn test_signup_without_email_is_400_with_json_body() {
    let router = build_router(seeded_state());

    let (status, json) = send(&router, post("/activities/Futebol/signup")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["detail"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_remove_without_email_is_400_with_json_body() {
    let router = build_router(seeded_state());

    let (status, json) = send(&router, delete("/activities/Futebol/remove")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_remove_preserves_order_of_the_rest() {
    let state = small_state();
    let router = build_router(Arc::clone(&state));

    let (status, json) = send(&router, delete("/activities/Chess/remove?email=b@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "b@mergington.edu removido(a) de Chess com sucesso"
    );

    let (_, json) = send(&router, get("/activities")).await;
    assert_eq!(
        json["Chess"]["participants"],
        serde_json::json!(["a@mergington.edu", "c@mergington.edu"])
    );
}

#[tokio::test]
async fn test_remove_absent_participant_is_404() {
    let state = small_state();
    let router = build_router(Arc::clone(&state));

    let (status, json) = send(&router, delete("/activities/Chess/remove?email=z@mergington.edu")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Participante não encontrado nesta atividade");

    let directory = state.directory.read().await;
    assert_eq!(directory.get("Chess").unwrap().participants.len(), 3);
}

#[tokio::test]
async fn test_remove_from_unknown_activity_is_404() {
    let router = build_router(small_state());

    let (status, json) = send(&router, delete("/activities/Drama/remove?email=a@mergington.edu")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Atividade não encontrada");
}

#[tokio::test]
async fn test_remove_twice_is_404_the_second_time() {
    let router = build_router(small_state());

    let uri = "/activities/Chess/remove?email=a@mergington.edu";
    let (status, _) = send(&router, delete(uri)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&router, delete(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_signup_wrong_method_is_405() {
    let router = build_router(seeded_state());

    let response = router
        .oneshot(get("/activities/Futebol/signup?email=x@mergington.edu"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_states_are_isolated() {
    let first = build_router(seeded_state());
    let second = build_router(seeded_state());

    let (status, _) = send(&first, post("/activities/Teatro/signup?email=x@mergington.edu")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&second, get("/activities")).await;
    assert_eq!(json["Teatro"]["participants"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(seeded_state());

    let response = router.oneshot(get("/api/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
