//! Pipeline Stages
//!
//! A stage either fails the operation or hands it on through `next`.
//! Product routes register `observe`, `authorize` and `validate`, in that order.

use super::context::RequestContext;
use super::operation::Operation;
use super::pipeline::{Next, StageFuture};

/// One named stage in front of the executor
pub trait Middleware: Send + Sync {
    /// Stage name for logs and introspection
    fn name(&self) -> &'static str;

    /// Run this stage; may fill in `ctx` before calling `next`
    fn process<'a>(
        &'a self,
        op: &'a Operation,
        ctx: &'a mut RequestContext,
        next: Next<'a>,
    ) -> StageFuture<'a>;
}

pub mod auth;
pub mod observe;
pub mod validate;

pub use auth::ApiKeyMiddleware;
pub use observe::ObserveMiddleware;
pub use validate::{is_json_content_type, ValidationMiddleware};
