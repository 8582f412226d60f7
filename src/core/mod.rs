//! Core domain logic of the back-office: authentication and sessions

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod notification;

pub use notification::{Navigator, Notification, NotificationType, Notifier};
