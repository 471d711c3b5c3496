//! Execution Pipeline
//!
//! Ordered middleware stages in front of a single executor.
//! Product routes run: Observe → Authorize → Validate → Execute.
//!
//! A stage that returns an error never calls `next`, so every later stage
//! and the executor are skipped and the error goes straight to response
//! mapping. The stage that stopped an operation is logged at debug level.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::context::RequestContext;
use super::error::CoreResult;
use super::middleware::Middleware;
use super::operation::Operation;
use crate::rest_api::Outcome;

/// Result of an operation
pub type OperationResult = CoreResult<Outcome>;

/// Future returned by every stage and by the executor
pub type StageFuture<'a> = Pin<Box<dyn Future<Output = OperationResult> + Send + 'a>>;

/// Operation executor (final stage of pipeline)
pub trait OperationExecutor: Send + Sync {
    fn execute<'a>(&'a self, op: &'a Operation, ctx: &'a RequestContext) -> StageFuture<'a>;
}

/// The remaining stages of one pipeline run
pub struct Next<'a> {
    stages: &'a [Box<dyn Middleware>],
    executor: &'a dyn OperationExecutor,
    /// Index of the first stage in `stages` within the whole pipeline
    position: usize,
    /// Furthest position reached during this run
    reached: &'a AtomicUsize,
}

impl<'a> Next<'a> {
    /// Hand the operation to the next stage, or to the executor after the last
    pub fn run(self, op: &'a Operation, ctx: &'a mut RequestContext) -> StageFuture<'a> {
        Box::pin(async move {
            self.reached.fetch_max(self.position, Ordering::Relaxed);

            let Some((stage, rest)) = self.stages.split_first() else {
                return self.executor.execute(op, ctx).await;
            };

            let next = Next {
                stages: rest,
                executor: self.executor,
                position: self.position + 1,
                reached: self.reached,
            };
            let result = stage.process(op, ctx, next).await;

            // Errors from later stages pass back through here too; only the
            // deepest stage reached is the one that refused.
            if let Err(err) = &result {
                if self.reached.load(Ordering::Relaxed) == self.position {
                    tracing::debug!(
                        stage = stage.name(),
                        operation = op.name(),
                        code = err.code(),
                        "stage stopped the operation"
                    );
                }
            }
            result
        })
    }
}

/// Stages plus executor, built once at startup and shared by all requests
pub struct Pipeline {
    stages: Vec<Box<dyn Middleware>>,
    executor: Box<dyn OperationExecutor>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run `op` through every stage and the executor
    pub async fn execute(&self, op: Operation, mut ctx: RequestContext) -> OperationResult {
        let reached = AtomicUsize::new(0);
        let next = Next {
            stages: &self.stages,
            executor: self.executor.as_ref(),
            position: 0,
            reached: &reached,
        };
        next.run(&op, &mut ctx).await
    }

    /// Names of the middleware stages, in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|m| m.name()).collect()
    }
}

/// Collects stages in registration order
pub struct PipelineBuilder {
    stages: Vec<Box<dyn Middleware>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage; it runs after every stage added before it
    pub fn stage(mut self, m: impl Middleware + 'static) -> Self {
        self.stages.push(Box::new(m));
        self
    }

    /// Finish with the executor that handles operations every stage let through
    pub fn build(self, executor: impl OperationExecutor + 'static) -> Pipeline {
        Pipeline {
            stages: self.stages,
            executor: Box::new(executor),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
