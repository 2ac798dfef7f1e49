//! Shared building blocks used across features.

pub mod notify;

pub use notify::{CollectingSink, Notification, NotificationSink, Severity};
