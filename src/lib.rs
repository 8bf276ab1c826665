//! # Notification Service
//!
//! Service for sending and managing per-recipient notifications.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, validation guards and repository traits
//! - **application**: Notification use cases (send, cancel, read state, queries)
//! - **infrastructure**: External concerns (database, migrations, repositories)
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Cross-cutting helpers (graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
