//! Validation Middleware
//!
//! Parses the body of write operations, runs the product rules, and injects
//! the accepted fields into the context for the executor.

use axum::http::{header, HeaderMap, StatusCode};
use serde_json::{Map, Value};

use crate::catalog::validate;
use crate::core::context::RequestContext;
use crate::core::error::{CoreError, CoreResult};
use crate::core::operation::Operation;
use crate::core::pipeline::{Next, StageFuture};

use super::Middleware;

/// Message for bodies that are not JSON
pub const MALFORMED_BODY: &str = "Malformed JSON body";

/// Whether the request declares a JSON body (`application/json`, any parameters).
///
/// Bodies of any other type are never parsed and read as empty.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Decode a request body; a blank body reads as an empty object
pub fn parse_body(body: &[u8]) -> CoreResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|_| CoreError::status(StatusCode::BAD_REQUEST, MALFORMED_BODY))
}

/// Validation middleware
pub struct ValidationMiddleware;

impl Middleware for ValidationMiddleware {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn process<'a>(
        &'a self,
        op: &'a Operation,
        ctx: &'a mut RequestContext,
        next: Next<'a>,
    ) -> StageFuture<'a> {
        Box::pin(async move {
            if let Some(body) = op.body() {
                let candidate = parse_body(body)?;
                ctx.validated = Some(validate(&candidate)?);
            }

            next.run(op, ctx).await
        })
    }
}
