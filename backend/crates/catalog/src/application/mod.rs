//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod add_product;
pub mod config;
pub mod delete_product;
pub mod derive_view;
pub mod hydrate_catalog;
pub mod update_product;
