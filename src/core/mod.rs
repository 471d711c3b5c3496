//! # Core Module
//!
//! Operation model, middleware pipeline, typed errors, and the executor that
//! applies operations to the product store. Every product route runs through
//! this module.
//!
//! ## Design Principles
//!
//! - Single operation model for all product requests
//! - Explicit, ordered middleware stages with short-circuit on failure
//! - One error type, translated to HTTP in exactly one place

pub mod context;
pub mod error;
pub mod executor;
pub mod middleware;
pub mod operation;
pub mod pipeline;

pub use context::RequestContext;
pub use error::{CoreError, CoreResult};
pub use executor::CatalogExecutor;
pub use middleware::{
    is_json_content_type, ApiKeyMiddleware, Middleware, ObserveMiddleware, ValidationMiddleware,
};
pub use operation::Operation;
pub use pipeline::{
    Next, OperationExecutor, OperationResult, Pipeline, PipelineBuilder, StageFuture,
};
