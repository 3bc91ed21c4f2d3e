//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::derive_view::DashboardView;
use crate::application::hydrate_catalog::HydrateCatalogOutput;
use crate::domain::entities::{Product, User};
use crate::domain::services::format_price;
use crate::domain::value_objects::{LoadStatus, SortConfig, SortField, SortOrder, ViewSelection};

/// Query for GET /api/catalog/view
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_field: Option<SortField>,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl ViewQuery {
    pub fn into_selection(self) -> ViewSelection {
        let sort = SortConfig::new(
            self.sort_field.unwrap_or_default(),
            self.sort_order.unwrap_or_default(),
        );
        ViewSelection::default()
            .with_search(self.search.as_deref().unwrap_or_default())
            .with_category(self.category.as_deref().unwrap_or_default())
            .with_sort(sort)
    }
}

/// Summary cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_products: usize,
    pub registered_users: usize,
    pub average_price: f64,
    /// Average price as shown on the card, e.g. `$12.50`
    pub average_price_display: String,
}

/// Response for GET /api/catalog/view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewResponse {
    pub products: Vec<Product>,
    pub stats: StatsResponse,
    pub categories: Vec<String>,
    pub form_categories: Vec<String>,
    pub sort: SortConfig,
    pub status: LoadStatus,
}

impl From<DashboardView> for DashboardViewResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            stats: StatsResponse {
                total_products: view.stats.total_products,
                registered_users: view.stats.registered_users,
                average_price: view.stats.average_price,
                average_price_display: format_price(view.stats.average_price),
            },
            products: view.products,
            categories: view.categories,
            form_categories: view.form_categories,
            sort: view.sort,
            status: view.status,
        }
    }
}

/// Request for POST /api/catalog/sort/toggle
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleSortRequest {
    pub field: SortField,
    #[serde(default)]
    pub current: Option<SortConfig>,
}

/// Registered user as listed by GET /api/catalog/users
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            full_name: user.name.full(),
            email: user.email,
            username: user.username,
        }
    }
}

/// Response for POST /api/catalog/hydrate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrateResponse {
    pub products: usize,
    pub users: usize,
    pub dropped_duplicates: usize,
}

impl From<HydrateCatalogOutput> for HydrateResponse {
    fn from(output: HydrateCatalogOutput) -> Self {
        Self {
            products: output.products,
            users: output.users,
            dropped_duplicates: output.dropped_duplicates,
        }
    }
}
