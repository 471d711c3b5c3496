//! Product HTTP Routes
//!
//! Thin handlers: each route builds an `Operation`, runs it through the
//! shared pipeline, and lets `Outcome` / `CoreError` shape the response.
//!
//! `/api/products/stats` is a static segment, which the router always
//! prefers over the `/:id` parameter regardless of registration order.
//! Every path is also served with a trailing slash.
//!
//! Write bodies are read only when declared as JSON and are capped at
//! [`MAX_BODY_BYTES`]; a body that cannot be read fails as a `CoreError`
//! with the extractor's status, before authorization.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, Query, State},
    http::{HeaderMap, Method},
    routing::get,
    Router,
};

use crate::catalog::ProductStore;
use crate::core::{
    is_json_content_type, ApiKeyMiddleware, CatalogExecutor, CoreError, ObserveMiddleware,
    Operation, Pipeline, RequestContext, ValidationMiddleware,
};
use crate::rest_api::{ListQuery, Outcome};

// ==================
// Shared State
// ==================

/// Product route state shared across handlers
pub struct ProductState {
    pub pipeline: Pipeline,
}

impl ProductState {
    /// Wire the pipeline: observe, authorize, validate, execute
    pub fn new(store: Arc<ProductStore>, api_key: impl Into<String>) -> Self {
        let pipeline = Pipeline::builder()
            .stage(ObserveMiddleware)
            .stage(ApiKeyMiddleware::new(api_key))
            .stage(ValidationMiddleware)
            .build(CatalogExecutor::new(store));
        Self { pipeline }
    }

    async fn run(
        &self,
        method: Method,
        headers: &HeaderMap,
        op: Operation,
    ) -> Result<Outcome, CoreError> {
        let ctx = RequestContext::from_headers(method, headers);
        self.pipeline.execute(op, ctx).await
    }
}

type SharedState = Arc<ProductState>;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// The body handed to the pipeline: as sent when declared JSON, else empty
fn json_payload(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Bytes, CoreError> {
    if !is_json_content_type(headers) {
        return Ok(Bytes::new());
    }
    body.map_err(|rejection| CoreError::status(rejection.status(), rejection.body_text()))
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: SharedState) -> Router {
    let collection = || get(list_products).post(create_product);
    let stats = || get(product_stats);
    let item = || get(get_product).put(replace_product).delete(delete_product);

    Router::new()
        .route("/api/products", collection())
        .route("/api/products/", collection())
        .route("/api/products/stats", stats())
        .route("/api/products/stats/", stats())
        .route("/api/products/:id", item())
        .route("/api/products/:id/", item())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn list_products(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Outcome, CoreError> {
    let op = Operation::List(ListQuery::parse(&params));
    state.run(method, &headers, op).await
}

async fn product_stats(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
) -> Result<Outcome, CoreError> {
    state.run(method, &headers, Operation::Stats).await
}

async fn get_product(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Outcome, CoreError> {
    state.run(method, &headers, Operation::Get { id }).await
}

async fn create_product(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Outcome, CoreError> {
    let body = json_payload(&headers, body)?;
    state.run(method, &headers, Operation::Create { body }).await
}

async fn replace_product(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Outcome, CoreError> {
    let body = json_payload(&headers, body)?;
    state
        .run(method, &headers, Operation::Replace { id, body })
        .await
}

async fn delete_product(
    State(state): State<SharedState>,
    method: Method,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Outcome, CoreError> {
    state.run(method, &headers, Operation::Delete { id }).await
}
