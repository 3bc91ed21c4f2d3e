//! Infrastructure Layer
//!
//! Live store implementations.

pub mod memory;

pub use memory::InMemoryFavoritesStore;
