//! Request Context
//!
//! Context carried through the execution pipeline.

use std::time::Instant;

use axum::http::{HeaderMap, Method};
use uuid::Uuid;

use crate::catalog::ProductFields;

use super::middleware::auth::extract_api_key;

/// Context carried through the execution pipeline
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID for tracing
    pub request_id: Uuid,

    /// HTTP method of the incoming request
    pub method: Method,

    /// API key presented by the caller, if any
    pub credential: Option<String>,

    /// Fields accepted by the validation stage (injected for writes)
    pub validated: Option<ProductFields>,

    /// Start time for duration tracking
    started_at: Instant,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(method: Method) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method,
            credential: None,
            validated: None,
            started_at: Instant::now(),
        }
    }

    /// Create a context from request headers, picking up the API key
    pub fn from_headers(method: Method, headers: &HeaderMap) -> Self {
        Self {
            credential: extract_api_key(headers),
            ..Self::new(method)
        }
    }

    /// Attach an API key
    pub fn with_credential(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(key.into());
        self
    }

    /// When the context was created
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_new_context_is_unauthenticated() {
        let ctx = RequestContext::new(Method::GET);
        assert!(ctx.credential.is_none());
        assert!(ctx.validated.is_none());
    }

    #[test]
    fn test_from_headers_reads_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("secret"));

        let ctx = RequestContext::from_headers(Method::POST, &headers);
        assert_eq!(ctx.credential.as_deref(), Some("secret"));
        assert_eq!(ctx.method, Method::POST);
    }

    #[test]
    fn test_request_ids_differ() {
        let a = RequestContext::new(Method::GET);
        let b = RequestContext::new(Method::GET);
        assert_ne!(a.request_id, b.request_id);
    }
}
