//! Authorization Middleware
//!
//! Shared-secret check for mutating methods. Reads pass through untouched.

use axum::http::{HeaderMap, Method};
use subtle::ConstantTimeEq;

use crate::core::context::RequestContext;
use crate::core::error::{CoreError, CoreResult};
use crate::core::operation::Operation;
use crate::core::pipeline::{Next, StageFuture};

use super::Middleware;

/// Dedicated API key header
pub const API_KEY_HEADER: &str = "x-api-key";

/// Bearer-style fallback header
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Message of every authorization failure
pub const INVALID_API_KEY: &str = "Invalid or missing API key";

/// Whether `method` must present the shared secret
pub fn requires_api_key(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Pull the presented key from `x-api-key`, falling back to `authorization`.
///
/// A leading `"Bearer "` is stripped from the authorization value. Empty or
/// non-UTF-8 values count as absent.
pub fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    };

    if let Some(key) = header_value(API_KEY_HEADER) {
        return Some(key.to_string());
    }

    header_value(AUTHORIZATION_HEADER)
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Check `provided` against `secret` when `method` is gated
pub fn authorize(method: &Method, provided: Option<&str>, secret: &str) -> CoreResult<()> {
    if !requires_api_key(method) {
        return Ok(());
    }

    match provided {
        Some(key) if !key.is_empty() && bool::from(key.as_bytes().ct_eq(secret.as_bytes())) => {
            Ok(())
        }
        _ => Err(CoreError::unauthorized(INVALID_API_KEY)),
    }
}

/// Authorization middleware
pub struct ApiKeyMiddleware {
    secret: String,
}

impl ApiKeyMiddleware {
    /// Create a gate expecting `secret`
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Middleware for ApiKeyMiddleware {
    fn name(&self) -> &'static str {
        "authorize"
    }

    fn process<'a>(
        &'a self,
        op: &'a Operation,
        ctx: &'a mut RequestContext,
        next: Next<'a>,
    ) -> StageFuture<'a> {
        Box::pin(async move {
            authorize(&ctx.method, ctx.credential.as_deref(), &self.secret)?;

            // Continue to next middleware
            next.run(op, ctx).await
        })
    }
}
