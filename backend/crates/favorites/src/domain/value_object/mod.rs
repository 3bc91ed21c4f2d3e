//! Value Object Module

pub mod favorite_key;
pub mod favorite_set;
pub mod user_id;
