//! # Product REST API Module
//!
//! Listing query parsing, the filter/paginate query engine, and the
//! success response bodies.

pub mod filter;
pub mod parser;
pub mod query;
pub mod response;

pub use filter::{FilterSet, ProductFilter};
pub use parser::{ListQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use query::query;
pub use response::{DeleteResponse, ListResponse, Outcome, StatsResponse};
