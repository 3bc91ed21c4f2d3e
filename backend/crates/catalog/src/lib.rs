//! Product Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Products, the local catalog, the derived view engine, source traits
//! - `application/` - Use cases (hydrate, add, update, delete, derive view)
//! - `infra/` - Remote REST source and the in-memory catalog store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## State Model
//! - The catalog is hydrated once from the remote API and never re-synced
//! - Afterwards only local add/update/delete change it
//! - Views (search, category, sort, statistics) are pure functions of the
//!   catalog and the caller's current selection

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::http::HttpCatalogSource;
pub use infra::memory::InMemoryCatalogRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
