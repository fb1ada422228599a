//! End-to-end smoke tests for the Sleuth API router.
//!
//! The full router is exercised in-process over an in-memory state store
//! and the mock draft provider; no network, no filesystem.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use sleuth_api::{create_api_router, ApiConfig, AppState};
use sleuth_core::DraftError;
use sleuth_draft::{DraftProvider, MockDraftProvider};
use sleuth_registry::Catalog;
use sleuth_session::{InMemoryStore, StateStore};

// ============================================================================
// HARNESS
// ============================================================================

fn test_app_with(drafts: Option<Arc<dyn DraftProvider>>) -> Router {
    let store: Arc<dyn StateStore> = Arc::new(InMemoryStore::new());
    let state = AppState::new(Arc::new(Catalog::builtin()), store, drafts);
    create_api_router(state, &ApiConfig::default())
}

fn test_app() -> Router {
    test_app_with(Some(Arc::new(MockDraftProvider::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/auth/login",
            None,
            &json!({"email": "demo@example.com", "password": "hunter2"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

// ============================================================================
// AUTH
// ============================================================================

#[tokio::test]
async fn login_issues_token_and_demo_profile() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/auth/login",
            None,
            &json!({"email": "demo@example.com", "password": "hunter2"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["name"], "Demo User");
    assert_eq!(body["user"]["email"], "demo@example.com");
    assert_eq!(body["user"]["preferences"]["favorite_reports"], json!([]));
}

#[tokio::test]
async fn login_requires_credentials() {
    let app = test_app();
    let (status, body) = send(
        &app,
        post_json("/auth/login", None, &json!({"email": "", "password": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn unauthenticated_api_call_is_401_with_error_body() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/dashboards", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn unauthenticated_browser_route_redirects_to_login() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(get("/dashboard/linkedin", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn login_view_is_public() {
    let app = test_app();
    let (status, body) = send(&app, get("/login", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login_endpoint"], "/auth/login");
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, post_json("/auth/logout", Some(&token), &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirect_to"], "/login");

    let (status, _) = send(&app, get("/auth/profile", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// DASHBOARDS
// ============================================================================

#[tokio::test]
async fn catalogue_lists_all_entries_in_order() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/dashboards", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["dashboards"][0]["id"], "linkedin");
    assert_eq!(body["dashboards"][5]["id"], "ai-navigator");
}

#[tokio::test]
async fn catalogue_search_is_case_insensitive() {
    let app = test_app();
    let token = login(&app).await;

    let (_, upper) = send(&app, get("/api/dashboards?q=GOOGLE", Some(&token))).await;
    let (_, lower) = send(&app, get("/api/dashboards?q=google", Some(&token))).await;
    assert_eq!(upper["total"], lower["total"]);
    assert_eq!(upper["dashboards"][0]["id"], "google-analytics");
}

#[tokio::test]
async fn resolve_returns_kind_matched_plan_and_records_history() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/dashboards/linkedin", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dashboard"]["kind"], "embedded-report");
    assert_eq!(body["plan"]["kind"], "embedded-frame");

    let (_, recent) = send(&app, get("/api/dashboards/recent", Some(&token))).await;
    assert_eq!(recent["dashboards"][0]["id"], "linkedin");
}

#[tokio::test]
async fn generated_analytics_resolves_to_the_static_fallback() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/dashboards/google-analytics", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["kind"], "static-document");
    assert_eq!(body["plan"]["document_path"], "/Google_Analytics_Website.pdf");
}

#[tokio::test]
async fn multi_report_resolves_tabs_with_first_selected() {
    let app = test_app();
    let token = login(&app).await;

    let (_, body) = send(&app, get("/api/dashboards/custom-reports", Some(&token))).await;
    assert_eq!(body["plan"]["kind"], "tabbed-reports");
    assert_eq!(body["plan"]["selected"], 0);
    assert_eq!(body["plan"]["tabs"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn unknown_dashboard_is_a_structured_404() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/dashboards/nonexistent", Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dashboard not found");
}

#[tokio::test]
async fn favorite_toggle_is_its_own_inverse() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        post_json("/api/dashboards/odoo/favorite", Some(&token), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preferences"]["favorite_reports"], json!(["odoo"]));

    let (_, body) = send(
        &app,
        post_json("/api/dashboards/odoo/favorite", Some(&token), &json!({})),
    )
    .await;
    assert_eq!(body["preferences"]["favorite_reports"], json!([]));
}

#[tokio::test]
async fn favoriting_an_unknown_dashboard_is_404() {
    let app = test_app();
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        post_json("/api/dashboards/ghost/favorite", Some(&token), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// COMPARE
// ============================================================================

#[tokio::test]
async fn compare_resolves_each_pane_independently() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        get("/api/compare?dashboards=linkedin,ghost", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let panes = body["panes"].as_array().unwrap();
    assert_eq!(panes.len(), 2);
    assert_eq!(panes[0]["status"], "resolved");
    assert_eq!(panes[1]["status"], "unavailable");
}

#[tokio::test]
async fn compare_without_selection_is_an_empty_state() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/compare", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["panes"], json!([]));
}

// ============================================================================
// CONTENT GENERATOR
// ============================================================================

#[tokio::test]
async fn draft_request_is_dispatched_with_defaults_filled_in() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/content-generator",
            Some(&token),
            &json!({"prompt": "grid reliability", "wordCount": 120}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let content = body["content"].as_str().unwrap();
    // The mock echoes the rendered prompt: omitted fields must have been
    // defaulted before dispatch.
    assert!(content.contains("professional"));
    assert!(content.contains("industry insight"));
    assert!(content.contains("grid reliability"));
    assert!(content.contains("120"));
}

#[tokio::test]
async fn draft_without_credentials_is_a_500_configuration_error() {
    let app = test_app_with(None);
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        post_json("/api/content-generator", Some(&token), &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Service configuration error");
    assert!(body["message"].as_str().unwrap().contains("credentials"));
}

#[tokio::test]
async fn draft_upstream_failure_is_a_500_with_the_contract_body() {
    let app = test_app_with(Some(Arc::new(MockDraftProvider::failing(
        DraftError::RequestFailed {
            provider: "openai".to_string(),
            status: 502,
            message: "bad gateway".to_string(),
        },
    ))));
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        post_json("/api/content-generator", Some(&token), &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate content");
    assert!(body["message"].as_str().unwrap().contains("bad gateway"));
}

#[tokio::test]
async fn draft_endpoint_rejects_non_post() {
    let app = test_app();
    let token = login(&app).await;

    let (status, _) = send(&app, get("/api/content-generator", Some(&token))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// NOTEPAD + HEALTH
// ============================================================================

#[tokio::test]
async fn notepad_round_trips_and_starts_empty() {
    let app = test_app();
    let token = login(&app).await;

    let (_, body) = send(&app, get("/api/notepad", Some(&token))).await;
    assert_eq!(body["content"], "");

    let request = Request::builder()
        .method("PUT")
        .uri("/api/notepad")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(json!({"content": "draft ideas"}).to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/notepad", Some(&token))).await;
    assert_eq!(body["content"], "draft ideas");
}

#[tokio::test]
async fn health_endpoints_are_public() {
    let app = test_app();

    let response = app.clone().oneshot(get("/health/ping", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = send(&app, get("/health/ready", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog_entries"], 6);
    assert_eq!(body["storage"]["status"], "ok");
}
