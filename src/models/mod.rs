//! Data models and types for the site behaviors.
//!
//! Contains domain types for:
//! - [`DisplayItem`], [`ALL_TAGS`] - Filterable blog posts and FAQ entries
//! - [`FormField`], [`FieldKind`], [`Validity`] - Form input state
//! - [`Notification`], [`NotificationKind`] - Toast messages

mod field;
mod item;
mod notification;

pub use field::{FieldKind, FormField, Validity};
pub use item::{ALL_TAGS, DisplayItem};
pub use notification::{Notification, NotificationKind};
