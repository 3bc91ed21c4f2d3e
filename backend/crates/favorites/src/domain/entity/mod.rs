//! Entity Module

pub mod favorite;
