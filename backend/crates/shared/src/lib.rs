//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of dashboard vocabulary:
//! - Common error types and result aliases
//! - Typed numeric identifiers (product ids, remote user ids)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the catalog and favorites domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
