//! # Catalog Module
//!
//! Product records, their validation rules, and the in-memory store.

pub mod product;
pub mod store;
pub mod validation;

pub use product::{seed_products, Product, ProductFields};
pub use store::{ProductStore, PRODUCT_NOT_FOUND};
pub use validation::{validate, INVALID_PRODUCT_DATA};
