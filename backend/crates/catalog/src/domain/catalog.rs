//! Local Catalog
//!
//! In-memory mirror of the remote catalog. Hydrated once, then changed only
//! by local add/update/delete. Product ids are unique at all times.

use std::collections::HashSet;

use kernel::id::ProductId;

use crate::domain::entities::{Product, ProductDraft, Rating, User};
use crate::domain::value_objects::LoadStatus;
use crate::error::{CatalogError, CatalogResult};

/// Highest allowed rating
pub const MAX_RATE: f64 = 5.0;

/// Outcome of a hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HydrateReport {
    pub accepted: usize,
    /// Remote entries skipped because their id was already seen
    pub dropped_duplicates: usize,
}

/// Ordered product list with the add/update/delete contract
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    products: Vec<Product>,
    hydrated: bool,
}

impl LocalCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replace the whole catalog with the remote result
    ///
    /// Allowed once. An empty result leaves the catalog empty. Later entries
    /// that repeat an id are dropped so ids stay unique.
    pub fn hydrate(&mut self, items: Vec<Product>) -> CatalogResult<HydrateReport> {
        if self.hydrated {
            return Err(CatalogError::AlreadyHydrated);
        }

        let mut seen = HashSet::with_capacity(items.len());
        let total = items.len();
        let products: Vec<Product> = items.into_iter().filter(|p| seen.insert(p.id)).collect();

        let report = HydrateReport {
            accepted: products.len(),
            dropped_duplicates: total - products.len(),
        };

        self.products = products;
        self.hydrated = true;
        Ok(report)
    }

    /// Create a product from a draft and put it first
    ///
    /// The new id is one more than the current maximum (1 when empty). Fails
    /// without touching the catalog when the maximum is already `u64::MAX`.
    pub fn add(&mut self, draft: ProductDraft, placeholder_image: &str) -> CatalogResult<Product> {
        let title = require_title(draft.title.as_deref())?;
        let price = require_price(draft.price)?;
        let rating = draft.rating.map(check_rating).transpose()?.unwrap_or_default();

        let image = draft
            .image
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        let id = match self.products.iter().map(|p| p.id).max() {
            Some(max) => max.next().ok_or(CatalogError::IdsExhausted(max))?,
            None => ProductId::new(ProductId::FIRST),
        };

        let product = Product {
            id,
            title,
            price,
            description: draft.description.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            image,
            rating,
        };

        self.products.insert(0, product.clone());
        Ok(product)
    }

    /// Apply a patch to an existing product in place
    ///
    /// Fields absent from the patch keep their value, so a patch carrying the
    /// full product shape replaces it entirely. Position never changes.
    pub fn update(&mut self, id: ProductId, patch: ProductDraft) -> CatalogResult<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;

        let mut next = slot.clone();
        if patch.title.is_some() {
            next.title = require_title(patch.title.as_deref())?;
        }
        if patch.price.is_some() {
            next.price = require_price(patch.price)?;
        }
        if let Some(rating) = patch.rating {
            next.rating = check_rating(rating)?;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        if let Some(image) = patch.image {
            next.image = image;
        }

        *slot = next.clone();
        Ok(next)
    }

    /// Remove a product, keeping the order of the rest
    pub fn delete(&mut self, id: ProductId) -> CatalogResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        Ok(self.products.remove(index))
    }
}

/// Full state held for one dashboard: catalog, fetched users, load status
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub status: LoadStatus,
}

fn require_title(title: Option<&str>) -> CatalogResult<String> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title.to_string()),
        _ => Err(CatalogError::validation("title", "Title is required")),
    }
}

// Zero counts as missing, like an empty form input.
fn require_price(price: Option<f64>) -> CatalogResult<f64> {
    match price {
        None => Err(CatalogError::validation("price", "Price is required")),
        Some(p) if p == 0.0 => Err(CatalogError::validation("price", "Price is required")),
        Some(p) if !p.is_finite() || p < 0.0 => Err(CatalogError::validation(
            "price",
            "Price must be a non-negative number",
        )),
        Some(p) => Ok(p),
    }
}

fn check_rating(rating: Rating) -> CatalogResult<Rating> {
    if !rating.rate.is_finite() || !(0.0..=MAX_RATE).contains(&rating.rate) {
        return Err(CatalogError::validation(
            "rating",
            format!("Rating must be between 0 and {MAX_RATE}"),
        ));
    }
    Ok(rating)
}
