//! Observability for the product API
//!
//! Structured logging via `tracing`. Request-level events are emitted by the
//! observe pipeline stage and by `tower_http`'s trace layer; this module only
//! installs the subscriber.

mod logging;

pub use logging::{env_filter, init_logging, DEFAULT_FILTER};
