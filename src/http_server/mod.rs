//! # HTTP Server Module
//!
//! Axum server exposing the product API.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome text
//! - `GET /api/products` - Filtered, paginated listing
//! - `GET /api/products/stats` - Counts per category
//! - `GET|PUT|DELETE /api/products/:id` - Single product
//! - `POST /api/products` - Create
//!
//! Mutating methods require the shared API key in `x-api-key` or
//! `authorization: Bearer <key>`.

pub mod config;
pub mod product_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig, DEFAULT_API_KEY};
pub use product_routes::{product_routes, ProductState};
pub use server::{HttpServer, WELCOME_MESSAGE};
