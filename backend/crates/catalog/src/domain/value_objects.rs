//! Domain Value Objects
//!
//! Immutable selection and summary types for the product dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Product;

/// Field the product table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Price,
    Rating,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortField::Price),
            "rating" => Ok(SortField::Rating),
            other => Err(format!("Unknown sort field '{other}'")),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Active sort selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortConfig {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Clicking the active column flips the order; another column starts ascending
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.order.flipped())
        } else {
            Self::new(field, SortOrder::Asc)
        }
    }
}

/// Category selection, either the wildcard or one exact category label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Label of the wildcard option
    pub const WILDCARD: &'static str = "all";

    /// Parse a selector value; the wildcard label and blank input select everything
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == Self::WILDCARD {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::WILDCARD,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Search term, stored already folded for case-insensitive matching
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(platform::text::fold(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty term matches everything; otherwise title or description must contain it
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty()
            || platform::text::contains_folded(&product.title, &self.0)
            || platform::text::contains_folded(&product.description, &self.0)
    }
}

/// Everything the caller currently has selected in the toolbar
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSelection {
    pub search: SearchTerm,
    pub category: CategoryFilter,
    pub sort: SortConfig,
}

impl ViewSelection {
    pub fn with_search(mut self, raw: &str) -> Self {
        self.search = SearchTerm::new(raw);
        self
    }

    pub fn with_category(mut self, raw: &str) -> Self {
        self.category = CategoryFilter::parse(raw);
        self
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }
}

/// Where the one-shot hydration stands
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready {
        #[serde(rename = "loadedAt")]
        loaded_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready { .. })
    }
}

/// Summary cards shown above the product table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    /// Size of the whole catalog, not of the filtered view
    pub total_products: usize,
    pub registered_users: usize,
    /// Mean price over the filtered view, 0 when the view is empty
    pub average_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_field_flips() {
        let sort = SortConfig::default();
        assert_eq!(sort, SortConfig::new(SortField::Price, SortOrder::Asc));

        let sort = sort.toggle(SortField::Price);
        assert_eq!(sort.order, SortOrder::Desc);
        let sort = sort.toggle(SortField::Price);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn test_toggle_other_field_resets_to_ascending() {
        let sort = SortConfig::new(SortField::Price, SortOrder::Desc).toggle(SortField::Rating);
        assert_eq!(sort, SortConfig::new(SortField::Rating, SortOrder::Asc));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("jewelery"),
            CategoryFilter::Only("jewelery".into())
        );
        // Category labels are compared exactly
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::Only("All".into()));
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("Rating".parse::<SortField>(), Ok(SortField::Rating));
        assert!("title".parse::<SortField>().is_err());
    }

    #[test]
    fn test_load_status_serialization() {
        let json = serde_json::to_string(&LoadStatus::Failed {
            message: "timeout".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"state":"failed","message":"timeout"}"#);

        let json = serde_json::to_string(&LoadStatus::Pending).unwrap();
        assert_eq!(json, r#"{"state":"pending"}"#);
    }
}
