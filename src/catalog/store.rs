//! # Product Store
//!
//! The in-memory product collection.
//!
//! Insertion order is the default read order. Mutations hold the write lock
//! for their whole duration, so identifier assignment, replace-in-place and
//! delete-by-index are atomic with respect to other requests. Reads share
//! the lock and never mutate.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::core::error::{CoreError, CoreResult};

use super::product::{seed_products, Product, ProductFields};

/// Message of every lookup miss
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Bucket for products without a category
pub const UNCATEGORIZED: &str = "uncategorized";

/// The product collection
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a store holding the fixed seed records
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Create a store from existing records; later duplicates of an id are dropped
    pub fn with_products(mut products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        products.retain(|p| seen.insert(p.id.clone()));
        Self {
            products: RwLock::new(products),
        }
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products
            .read()
            .map_err(|_| CoreError::unexpected("product store lock poisoned"))
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products
            .write()
            .map_err(|_| CoreError::unexpected("product store lock poisoned"))
    }

    /// All products in insertion order
    pub fn list(&self) -> CoreResult<Vec<Product>> {
        Ok(self.read()?.clone())
    }

    /// Look up one product
    pub fn get(&self, id: &str) -> CoreResult<Product> {
        self.read()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(PRODUCT_NOT_FOUND))
    }

    /// Append a product under a freshly generated identifier
    pub fn create(&self, fields: ProductFields) -> CoreResult<Product> {
        let mut products = self.write()?;
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let product = Product::from_fields(id, fields);
        products.push(product.clone());
        Ok(product)
    }

    /// Overwrite every field but the identifier, keeping the position
    pub fn replace(&self, id: &str, fields: ProductFields) -> CoreResult<Product> {
        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found(PRODUCT_NOT_FOUND))?;

        product.apply(fields);
        Ok(product.clone())
    }

    /// Remove a product and return it
    pub fn delete(&self, id: &str) -> CoreResult<Product> {
        let mut products = self.write()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found(PRODUCT_NOT_FOUND))?;

        Ok(products.remove(index))
    }

    /// Product counts keyed by category, sorted by key
    pub fn count_by_category(&self) -> CoreResult<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for product in self.read()?.iter() {
            let bucket = if product.category.is_empty() {
                UNCATEGORIZED
            } else {
                product.category.as_str()
            };
            *counts.entry(bucket.to_string()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
