//! # Response Formatting
//!
//! Success bodies for the product API and their HTTP status codes.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Message returned alongside a deleted product
pub const PRODUCT_DELETED: &str = "Product deleted";

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub page: usize,
    pub limit: usize,
    /// Matching records before pagination
    pub total: usize,
    pub data: Vec<T>,
}

/// Delete confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub product: Product,
}

impl DeleteResponse {
    pub fn new(product: Product) -> Self {
        Self {
            message: PRODUCT_DELETED.to_string(),
            product,
        }
    }
}

/// Per-category counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub count_by_category: BTreeMap<String, usize>,
}

/// Successful result of a pipeline operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listed(ListResponse<Product>),
    Found(Product),
    Stats(StatsResponse),
    Created(Product),
    Replaced(Product),
    Deleted(DeleteResponse),
}

impl Outcome {
    /// Get HTTP status code for this outcome
    pub fn status_code(&self) -> StatusCode {
        match self {
            Outcome::Created(_) => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Outcome::Listed(page) => (status, Json(page)).into_response(),
            Outcome::Found(product) | Outcome::Created(product) | Outcome::Replaced(product) => {
                (status, Json(product)).into_response()
            }
            Outcome::Stats(stats) => (status, Json(stats)).into_response(),
            Outcome::Deleted(deleted) => (status, Json(deleted)).into_response(),
        }
    }
}
