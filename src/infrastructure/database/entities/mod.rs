//! Database entities module

pub mod notification;

pub use notification::Entity as Notification;
