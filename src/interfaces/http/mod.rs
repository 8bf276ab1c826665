//! HTTP REST API interfaces
//!
//! - `common`: Shared response envelopes
//! - `modules`: Per-resource DTOs and request handlers
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
