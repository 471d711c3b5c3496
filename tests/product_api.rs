//! Product API Tests
//!
//! Drives the full router (pipeline, routing, error mapping) with
//! in-process requests. Each test builds its own seeded server.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_catalog::http_server::{HttpServer, ServerConfig, WELCOME_MESSAGE};
use serde_json::{json, Value};
use tower::ServiceExt;

const KEY: &str = "test-key";

// =============================================================================
// Test Utilities
// =============================================================================

fn app() -> Router {
    let config = ServerConfig {
        api_key: KEY.to_string(),
        ..Default::default()
    };
    HttpServer::new(config).router()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn keyed(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn valid_body() -> String {
    json!({
        "name": "Kettle",
        "description": "Electric kettle with auto shutoff",
        "price": 35,
        "category": "Kitchen",
        "inStock": true
    })
    .to_string()
}

// =============================================================================
// Reads
// =============================================================================

#[tokio::test]
async fn test_welcome_text() {
    let app = app();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], WELCOME_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_list_defaults() {
    let app = app();
    let (status, body) = send(&app, get("/api/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][2]["inStock"], false);
}

#[tokio::test]
async fn test_list_category_second_page() {
    let app = app();
    let (status, body) = send(
        &app,
        get("/api/products?category=ELECTRONICS&limit=1&page=2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], "2");
}

#[tokio::test]
async fn test_list_search_and_bad_paging() {
    let app = app();
    let (status, body) = send(&app, get("/api/products?search=coffee&page=0&limit=abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["name"], "Coffee Maker");
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let app = app();
    let (status, body) = send(&app, get("/api/products?page=5")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_trailing_slash_paths() {
    let app = app();

    let (status, body) = send(&app, get("/api/products/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);

    let (status, body) = send(&app, get("/api/products/stats/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);

    let (status, body) = send(&app, get("/api/products/2/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Smartphone");
}

#[tokio::test]
async fn test_stats_is_not_an_id() {
    let app = app();
    let (status, body) = send(&app, get("/api/products/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"total": 3, "countByCategory": {"electronics": 2, "kitchen": 1}})
    );
}

#[tokio::test]
async fn test_get_unknown_id() {
    let app = app();
    let (status, body) = send(&app, get("/api/products/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Product not found"}));
}

// =============================================================================
// Authorization
// =============================================================================

#[tokio::test]
async fn test_mutation_without_key_rejected_before_validation() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Invalid or missing API key"}));
}

#[tokio::test]
async fn test_wrong_key_rejected() {
    let app = app();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/products/1")
        .header("x-api-key", "nope")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Nothing was deleted
    let (status, _) = send(&app, get("/api/products/1")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_bearer_key_accepted() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(header::AUTHORIZATION, format!("Bearer {}", KEY))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(valid_body()))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_create_then_get() {
    let app = app();
    let (status, created) = send(&app, keyed(Method::POST, "/api/products", valid_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["category"], "Kitchen");

    let (status, fetched) = send(&app, get(&format!("/api/products/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, stats) = send(&app, get("/api/products/stats")).await;
    assert_eq!(stats["total"], 4);
}

#[tokio::test]
async fn test_create_reports_every_rule() {
    let app = app();
    let body = json!({"name": "A", "description": "", "price": -1, "inStock": "yes"});

    let (status, response) =
        send(&app, keyed(Method::POST, "/api/products", body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Invalid product data");
    assert_eq!(response["errors"].as_array().unwrap().len(), 5);

    let (_, list) = send(&app, get("/api/products")).await;
    assert_eq!(list["total"], 3);
}

#[tokio::test]
async fn test_malformed_body() {
    let app = app();
    let (status, body) = send(&app, keyed(Method::POST, "/api/products", "{oops")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Malformed JSON body");
}

#[tokio::test]
async fn test_non_json_content_type_reads_as_empty() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header("x-api-key", KEY)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(valid_body()))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product data");
    assert_eq!(body["errors"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_oversized_body_gets_json_error() {
    let app = app();
    let padding = "x".repeat(3 * 1024 * 1024);
    let oversized = json!({
        "name": "Kettle",
        "description": padding,
        "price": 35,
        "category": "Kitchen",
        "inStock": true
    })
    .to_string();

    let response = app
        .clone()
        .oneshot(keyed(Method::POST, "/api/products", oversized))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    assert_eq!(
        content_type.as_ref().and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("errors").is_none());

    let (_, list) = send(&app, get("/api/products")).await;
    assert_eq!(list["total"], 3);
}

#[tokio::test]
async fn test_replace_keeps_id() {
    let app = app();
    let (status, body) = send(&app, keyed(Method::PUT, "/api/products/3", valid_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "3");
    assert_eq!(body["name"], "Kettle");

    let (_, fetched) = send(&app, get("/api/products/3")).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_replace_unknown_id() {
    let app = app();
    let (status, body) = send(&app, keyed(Method::PUT, "/api/products/999", valid_body())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_delete_then_get() {
    let app = app();
    let (status, body) = send(&app, keyed(Method::DELETE, "/api/products/1", Body::empty())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");
    assert_eq!(body["product"]["name"], "Laptop");

    let (status, _) = send(&app, get("/api/products/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, keyed(Method::DELETE, "/api/products/1", Body::empty())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let app = app();
    let (status, body) =
        send(&app, keyed(Method::DELETE, "/api/products/999", Body::empty())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Product not found"}));
}
