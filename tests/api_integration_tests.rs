//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles against the router.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use query_cache::{api::create_router, cache::CacheKey, AppState, CacheContext, QueryCache};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (AppState, Router) {
    let state = AppState::new(QueryCache::new(100, Duration::from_secs(300)));
    let app = create_router(state.clone());
    (state, app)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Lookup / Store ==

#[tokio::test]
async fn test_lookup_miss_then_hit() {
    let (_, app) = create_test_app();
    let context = json!({"schema_hash": "abc", "type": "sql_generation"});

    let (status, json) = send_json(
        &app,
        "POST",
        "/cache/lookup",
        json!({"query": "Total sales last week", "context": context}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"hit": false, "payload": null}));

    let (status, json) = send_json(
        &app,
        "PUT",
        "/cache/entries",
        json!({
            "query": "Total sales last week",
            "context": context,
            "payload": "SELECT SUM(total_sales) FROM sales"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let expected = CacheContext::sql_generation("abc");
    assert_eq!(
        json["key"],
        CacheKey::derive("total sales last week", Some(&expected)).to_string()
    );

    // Different casing and key order in the context still hit
    let (status, json) = send_json(
        &app,
        "POST",
        "/cache/lookup",
        json!({
            "query": "  total sales LAST WEEK",
            "context": {"type": "sql_generation", "schema_hash": "abc"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hit"], true);
    assert_eq!(json["payload"], "SELECT SUM(total_sales) FROM sales");
}

#[tokio::test]
async fn test_context_change_misses() {
    let (_, app) = create_test_app();

    send_json(
        &app,
        "PUT",
        "/cache/entries",
        json!({"query": "q", "context": {"schema_hash": "v1"}, "payload": 1}),
    )
    .await;

    let (_, json) = send_json(
        &app,
        "POST",
        "/cache/lookup",
        json!({"query": "q", "context": {"schema_hash": "v2"}}),
    )
    .await;
    assert_eq!(json["hit"], false);
}

#[tokio::test]
async fn test_store_empty_query_rejected() {
    let (_, app) = create_test_app();

    let (status, json) = send_json(
        &app,
        "PUT",
        "/cache/entries",
        json!({"query": "", "payload": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Query cannot be empty"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let (_, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cache/entries")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_ttl_expiration_via_api() {
    let (_, app) = create_test_app();

    send_json(
        &app,
        "PUT",
        "/cache/entries",
        json!({"query": "short lived", "payload": "x", "ttl": 1}),
    )
    .await;

    let (_, json) = send_json(&app, "POST", "/cache/lookup", json!({"query": "short lived"})).await;
    assert_eq!(json["hit"], true);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (_, json) = send_json(&app, "POST", "/cache/lookup", json!({"query": "short lived"})).await;
    assert_eq!(json["hit"], false);
}

// == Administrative Endpoints ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (state, app) = create_test_app();
    state.cache.set("a", None, json!(1), None).await;
    state.cache.get("a", None).await;
    state.cache.get("a", None).await;

    let (status, json) = send_empty(&app, "GET", "/cache/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    let stats = &json["cache_stats"];
    assert_eq!(stats["size"], 1);
    assert_eq!(stats["max_size"], 100);
    assert_eq!(stats["total_accesses"], 2);
    assert_eq!(stats["hit_rate"], 2.0);
    assert!(stats["oldest_entry_timestamp"].is_string());
    assert!(stats["newest_entry_timestamp"].is_string());
}

#[tokio::test]
async fn test_clear_endpoint() {
    let (state, app) = create_test_app();
    state.cache.set("a", None, json!(1), None).await;
    state.cache.set("b", None, json!(2), None).await;

    let (status, json) = send_empty(&app, "POST", "/cache/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Cache cleared successfully");

    let (_, json) = send_empty(&app, "GET", "/cache/stats").await;
    assert_eq!(json["cache_stats"]["size"], 0);
    assert_eq!(json["cache_stats"]["total_accesses"], 0);
    assert!(json["cache_stats"]["oldest_entry_timestamp"].is_null());
}

#[tokio::test]
async fn test_cleanup_endpoint() {
    let (state, app) = create_test_app();
    state
        .cache
        .set("short", None, json!(1), Some(Duration::from_millis(20)))
        .await;
    state.cache.set("long", None, json!(2), None).await;

    tokio::time::sleep(Duration::from_millis(80)).await;

    let (status, json) = send_empty(&app, "POST", "/cache/cleanup").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed_entries"], 1);

    let (_, json) = send_empty(&app, "POST", "/cache/cleanup").await;
    assert_eq!(json["removed_entries"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = create_test_app();

    let (status, json) = send_empty(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}
