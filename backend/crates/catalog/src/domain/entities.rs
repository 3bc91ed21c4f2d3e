//! Domain Entities
//!
//! Records as served by the remote catalog API, plus the partial product
//! the edit form submits.

use kernel::id::{ProductId, RemoteUserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SortField;

/// Aggregate customer rating
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// 0.0 - 5.0
    pub rate: f64,
    pub count: u64,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Image URI
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Numeric key the view engine sorts by
    pub fn sort_key(&self, field: SortField) -> f64 {
        match field {
            SortField::Price => self.price,
            SortField::Rating => self.rating.rate,
        }
    }
}

/// Partial product submitted by the add/edit form
///
/// Every field is optional; `title` and `price` are checked when the draft
/// is applied to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl ProductDraft {
    /// Draft with just the two required fields
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: Some(title.into()),
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Draft carrying every field of an existing product (full replacement)
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: Some(product.title.clone()),
            price: Some(product.price),
            description: Some(product.description.clone()),
            category: Some(product.category.clone()),
            image: Some(product.image.clone()),
            rating: Some(product.rating),
        }
    }
}

/// Person name as served by the users endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonName {
    pub firstname: String,
    pub lastname: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// Registered user of the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RemoteUserId,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub name: PersonName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_remote_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.sort_key(SortField::Price), 109.95);
        assert_eq!(product.sort_key(SortField::Rating), 3.9);
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"{
            "id": 2,
            "email": "morrison@gmail.com",
            "username": "mor_2314",
            "password": "83r5^_",
            "phone": "1-570-236-7033",
            "name": { "firstname": "david", "lastname": "morrison" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "mor_2314");
        assert_eq!(user.name.full(), "david morrison");
    }

    #[test]
    fn test_draft_from_product_is_complete() {
        let product = Product {
            id: ProductId::new(4),
            title: "Jacket".into(),
            price: 55.99,
            description: "Warm".into(),
            category: "men's clothing".into(),
            image: "img".into(),
            rating: Rating { rate: 4.7, count: 500 },
        };
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.title.as_deref(), Some("Jacket"));
        assert_eq!(draft.rating, Some(product.rating));
    }
}
