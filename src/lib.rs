//! product-catalog - An in-memory product catalog served over HTTP
//!
//! Requests flow through a single operation pipeline: observe, authorize,
//! validate, then execute against the shared [`catalog::ProductStore`].

pub mod catalog;
pub mod cli;
pub mod core;
pub mod http_server;
pub mod observability;
pub mod rest_api;
