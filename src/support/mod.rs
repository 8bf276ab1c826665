//! Cross-cutting support helpers

pub mod shutdown;

pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
