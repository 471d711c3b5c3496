//! # Query Engine
//!
//! Filter, count, then paginate. The order is fixed: `total` is taken after
//! filtering and before the page is cut, so it never depends on paging.

use crate::catalog::Product;

use super::filter::FilterSet;
use super::parser::ListQuery;
use super::response::ListResponse;

/// Run a listing query over `products`, preserving their order
pub fn query(products: &[Product], params: &ListQuery) -> ListResponse<Product> {
    let filters = FilterSet::from_query(params);
    let matching: Vec<&Product> = products.iter().filter(|p| filters.matches(p)).collect();
    let total = matching.len();

    let start = params.page.saturating_sub(1).saturating_mul(params.limit);
    let data = matching
        .into_iter()
        .skip(start)
        .take(params.limit)
        .cloned()
        .collect();

    ListResponse {
        page: params.page,
        limit: params.limit,
        total,
        data,
    }
}
