//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Entities (Product, User) and the product draft used for edits
//! - Value objects (sort, category and search selections, load status, statistics)
//! - The local catalog with its mutation contract
//! - The derived view engine (pure search/filter/sort/summary functions)
//! - Repository traits (remote source, local store)

pub mod catalog;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
