//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - JSON REST client for upstream APIs
//! - Live snapshot feeds with cancelable subscriptions
//! - Request header extraction
//! - Text folding for case-insensitive search

pub mod client;
pub mod rest;
pub mod snapshot;
pub mod text;
