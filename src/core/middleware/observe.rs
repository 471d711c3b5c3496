//! Observability Middleware
//!
//! Logs each operation's outcome and duration. Registered first so that it
//! also sees failures from every later stage.

use crate::core::context::RequestContext;
use crate::core::operation::Operation;
use crate::core::pipeline::{Next, StageFuture};

use super::Middleware;

/// Observability middleware
pub struct ObserveMiddleware;

impl Middleware for ObserveMiddleware {
    fn name(&self) -> &'static str {
        "observe"
    }

    fn process<'a>(
        &'a self,
        op: &'a Operation,
        ctx: &'a mut RequestContext,
        next: Next<'a>,
    ) -> StageFuture<'a> {
        Box::pin(async move {
            let request_id = ctx.request_id;
            let method = ctx.method.clone();
            let started = ctx.started_at();

            let result = next.run(op, ctx).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match &result {
                Ok(outcome) => tracing::info!(
                    request_id = %request_id,
                    method = %method,
                    operation = op.name(),
                    mutation = op.is_mutation(),
                    status = outcome.status_code().as_u16(),
                    elapsed_ms,
                    "operation completed"
                ),
                Err(err) => tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    operation = op.name(),
                    mutation = op.is_mutation(),
                    status = err.status_code().as_u16(),
                    code = err.code(),
                    elapsed_ms,
                    "operation failed"
                ),
            }

            result
        })
    }
}
