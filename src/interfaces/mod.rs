//! Interface adapters
//!
//! Currently a single inbound adapter: the HTTP REST API.

pub mod http;
