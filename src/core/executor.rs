//! Catalog Executor
//!
//! Final pipeline stage: applies an operation to the product store.

use std::sync::Arc;

use crate::catalog::{ProductFields, ProductStore};
use crate::rest_api::{query, DeleteResponse, Outcome, StatsResponse};

use super::context::RequestContext;
use super::error::{CoreError, CoreResult};
use super::operation::Operation;
use super::pipeline::{OperationExecutor, OperationResult, StageFuture};

/// Executes product operations against a shared store
pub struct CatalogExecutor {
    store: Arc<ProductStore>,
}

impl CatalogExecutor {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    fn dispatch(&self, op: &Operation, ctx: &RequestContext) -> OperationResult {
        match op {
            Operation::List(params) => {
                let products = self.store.list()?;
                Ok(Outcome::Listed(query(&products, params)))
            }
            Operation::Get { id } => self.store.get(id).map(Outcome::Found),
            Operation::Stats => {
                let count_by_category = self.store.count_by_category()?;
                Ok(Outcome::Stats(StatsResponse {
                    total: count_by_category.values().sum(),
                    count_by_category,
                }))
            }
            Operation::Create { .. } => {
                let fields = validated_fields(op, ctx)?;
                self.store.create(fields).map(Outcome::Created)
            }
            Operation::Replace { id, .. } => {
                let fields = validated_fields(op, ctx)?;
                self.store.replace(id, fields).map(Outcome::Replaced)
            }
            Operation::Delete { id } => self
                .store
                .delete(id)
                .map(|product| Outcome::Deleted(DeleteResponse::new(product))),
        }
    }
}

/// Writes only reach the store after the validation stage filled the context
fn validated_fields(op: &Operation, ctx: &RequestContext) -> CoreResult<ProductFields> {
    ctx.validated.clone().ok_or_else(|| {
        CoreError::unexpected(format!(
            "{} reached the executor without validated fields",
            op.name()
        ))
    })
}

impl OperationExecutor for CatalogExecutor {
    fn execute<'a>(
        &'a self,
        op: &'a Operation,
        ctx: &'a RequestContext,
    ) -> StageFuture<'a> {
        let result = self.dispatch(op, ctx);
        Box::pin(async move { result })
    }
}
