//! View Engine
//!
//! Pure functions that turn the catalog plus the current toolbar selection
//! into the rows, stats and selector options the dashboard renders.

use std::cmp::Ordering;

use crate::domain::entities::{Product, User};
use crate::domain::value_objects::{
    CategoryFilter, DashboardStats, SortConfig, SortOrder, ViewSelection,
};

/// Derive the visible product list
///
/// Search filter, then category filter, then a stable sort on the selected
/// field. Products with equal keys keep their catalog order.
pub fn derive_view(products: &[Product], selection: &ViewSelection) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| selection.search.matches(p))
        .filter(|p| selection.category.matches(p))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare(a, b, selection.sort));
    view
}

/// Ordering of two products under a sort selection
pub fn compare(a: &Product, b: &Product, sort: SortConfig) -> Ordering {
    let (left, right) = (a.sort_key(sort.field), b.sort_key(sort.field));
    match sort.order {
        SortOrder::Asc => left.total_cmp(&right),
        SortOrder::Desc => right.total_cmp(&left),
    }
}

/// Arithmetic mean of the prices, 0 for an empty slice
pub fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    products.iter().map(|p| p.price).sum::<f64>() / products.len() as f64
}

/// Distinct categories in first-seen order
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| *c == product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Category selector options: the wildcard followed by every distinct category
pub fn category_options(products: &[Product]) -> Vec<String> {
    std::iter::once(CategoryFilter::WILDCARD.to_string())
        .chain(categories(products))
        .collect()
}

/// Summary cards for the current view
pub fn dashboard_stats(catalog: &[Product], view: &[Product], users: &[User]) -> DashboardStats {
    DashboardStats {
        total_products: catalog.len(),
        registered_users: users.len(),
        average_price: average_price(view),
    }
}

/// Currency display with two decimals, e.g. `$12.50`
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}
