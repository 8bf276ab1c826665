//! Notification module — sending, cancelling and querying notifications

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
