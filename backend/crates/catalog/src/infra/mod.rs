//! Infrastructure Layer
//!
//! Remote catalog API client and the in-memory catalog store.

pub mod http;
pub mod memory;

pub use http::HttpCatalogSource;
pub use memory::InMemoryCatalogRepository;
