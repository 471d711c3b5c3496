//! # Product Filters
//!
//! Predicates applied to products before pagination.

use crate::catalog::Product;

use super::parser::ListQuery;

/// A single product predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Category equals the needle, ignoring case
    Category(String),

    /// Name contains the needle, ignoring case
    NameContains(String),
}

impl ProductFilter {
    /// Category filter; the needle is lower-cased once here
    pub fn category(needle: &str) -> Self {
        Self::Category(needle.to_lowercase())
    }

    /// Name search filter; the needle is lower-cased once here
    pub fn name_contains(needle: &str) -> Self {
        Self::NameContains(needle.to_lowercase())
    }

    /// Check if a product matches this filter
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            // An empty category never matches anything.
            Self::Category(needle) => {
                !product.category.is_empty() && product.category.to_lowercase() == *needle
            }
            Self::NameContains(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Filters combined with AND logic, applied in insertion order
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<ProductFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: ProductFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Category first, then name search
    pub fn from_query(query: &ListQuery) -> Self {
        let mut set = Self::new();
        if let Some(category) = &query.category {
            set = set.and(ProductFilter::category(category));
        }
        if let Some(search) = &query.search {
            set = set.and(ProductFilter::name_contains(search));
        }
        set
    }

    /// Check if a product matches all filters
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    #[test]
    fn test_category_ignores_case() {
        let laptop = &seed_products()[0];

        assert!(ProductFilter::category("Electronics").matches(laptop));
        assert!(ProductFilter::category("ELECTRONICS").matches(laptop));
        assert!(!ProductFilter::category("kitchen").matches(laptop));
    }

    #[test]
    fn test_empty_category_never_matches() {
        let mut product = seed_products().remove(0);
        product.category = String::new();

        assert!(!ProductFilter::category("").matches(&product));
    }

    #[test]
    fn test_name_search_is_substring() {
        let coffee = &seed_products()[2];

        assert!(ProductFilter::name_contains("fee ma").matches(coffee));
        assert!(ProductFilter::name_contains("COFFEE").matches(coffee));
        assert!(!ProductFilter::name_contains("tea").matches(coffee));
    }

    #[test]
    fn test_filter_set() {
        let query = ListQuery::default()
            .with_category("electronics")
            .with_search("phone");
        let filters = FilterSet::from_query(&query);
        let products = seed_products();

        let matched: Vec<_> = products
            .iter()
            .filter(|p| filters.matches(p))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(matched, vec!["2"]);
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let filters = FilterSet::new();
        assert!(seed_products().iter().all(|p| filters.matches(p)));
    }
}
