//! # Query Parameter Parser
//!
//! Parses listing query parameters into a `ListQuery`.
//!
//! Parsing never fails: unusable paging values fall back to their defaults
//! and empty filter values are treated as absent.

use std::collections::HashMap;

/// Page used when none (or an unusable one) is given
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none (or an unusable one) is given
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive category to match exactly
    pub category: Option<String>,

    /// Case-insensitive substring of the product name
    pub search: Option<String>,

    /// 1-based page number, always >= 1
    pub page: usize,

    /// Page size, always >= 1
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    /// Parse query parameters from a HashMap
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            category: non_empty(params.get("category")),
            search: non_empty(params.get("search")),
            page: parse_positive(params.get("page"), DEFAULT_PAGE),
            limit: parse_positive(params.get("limit"), DEFAULT_LIMIT),
        }
    }

    /// Filter on category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter on a name substring
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Select a page
    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page.max(1);
        self.limit = limit.max(1);
        self
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Positive integer prefix of `value`, or `default`
fn parse_positive(value: Option<&String>, default: usize) -> usize {
    match value.and_then(|v| leading_integer(v)) {
        Some((false, n)) if n > 0 => n,
        _ => default,
    }
}

/// Sign and magnitude of the leading integer in `value`.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at
/// the first non-digit, so `"2abc"` and `"3.9"` yield 2 and 3. Magnitudes
/// beyond `usize::MAX` saturate.
fn leading_integer(value: &str) -> Option<(bool, usize)> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });
    Some((negative, magnitude))
}
