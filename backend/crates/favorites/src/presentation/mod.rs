//! Presentation Layer
//!
//! HTTP handlers, DTOs and the user-context middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
