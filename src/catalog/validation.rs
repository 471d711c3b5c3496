//! # Product Validation
//!
//! Structural checks on a submitted product body.
//!
//! Every rule is evaluated independently and all violations are reported
//! together, in field order. Validation never looks at the store.

use serde_json::{Number, Value};

use crate::core::error::{CoreError, CoreResult};

use super::product::ProductFields;

/// Top-level message of every validation failure
pub const INVALID_PRODUCT_DATA: &str = "Invalid product data";

const NAME_RULE: &str = "name must be a string with at least 2 characters";
const DESCRIPTION_RULE: &str = "description must be a string with at least 5 characters";
const PRICE_RULE: &str = "price must be a non-negative number";
const CATEGORY_RULE: &str = "category must be a non-empty string";
const IN_STOCK_RULE: &str = "inStock must be a boolean";

/// Validate a candidate product body, returning its writable fields
pub fn validate(candidate: &Value) -> CoreResult<ProductFields> {
    let mut errors = Vec::new();

    let name = text_with_min_len(candidate, "name", 2);
    if name.is_none() {
        errors.push(NAME_RULE.to_string());
    }

    let description = text_with_min_len(candidate, "description", 5);
    if description.is_none() {
        errors.push(DESCRIPTION_RULE.to_string());
    }

    let price = non_negative_number(candidate, "price");
    if price.is_none() {
        errors.push(PRICE_RULE.to_string());
    }

    let category = text_with_min_len(candidate, "category", 1);
    if category.is_none() {
        errors.push(CATEGORY_RULE.to_string());
    }

    let in_stock = candidate.get("inStock").and_then(Value::as_bool);
    if in_stock.is_none() {
        errors.push(IN_STOCK_RULE.to_string());
    }

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock)) => {
            Ok(ProductFields {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(CoreError::validation(INVALID_PRODUCT_DATA, errors)),
    }
}

/// The raw string when its trimmed length reaches `min_len`.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (most emoji) counts as two.
fn text_with_min_len(candidate: &Value, field: &str, min_len: usize) -> Option<String> {
    match candidate.get(field) {
        Some(Value::String(s)) if s.trim().encode_utf16().count() >= min_len => Some(s.clone()),
        _ => None,
    }
}

fn non_negative_number(candidate: &Value, field: &str) -> Option<Number> {
    match candidate.get(field) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if !f.is_nan() && f >= 0.0 => Some(n.clone()),
            _ => None,
        },
        _ => None,
    }
}
