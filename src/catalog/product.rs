//! Product records
//!
//! `Product` is what the store holds and what the API returns.
//! `ProductFields` is the client-writable subset produced by the validator.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, immutable once assigned
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept as a JSON number so integral prices round-trip unchanged
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// Every field of a product except its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Build a product from validated fields and an identifier
    pub fn from_fields(id: impl Into<String>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
        }
    }

    /// Overwrite every field except the identifier
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
    }

    /// Copy out the writable fields
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }
}

fn seed(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Number::from(price),
        category: category.to_string(),
        in_stock,
    }
}

/// The records every fresh store starts with
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(
            "1",
            "Laptop",
            "High-performance laptop with 16GB RAM",
            1200,
            "electronics",
            true,
        ),
        seed(
            "2",
            "Smartphone",
            "Latest model with 128GB storage",
            800,
            "electronics",
            true,
        ),
        seed(
            "3",
            "Coffee Maker",
            "Programmable coffee maker with timer",
            50,
            "kitchen",
            false,
        ),
    ]
}
