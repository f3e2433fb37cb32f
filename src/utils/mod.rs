//! Utility modules for browser and DOM access.
//!
//! Provides:
//! - [`dom`] - Element lookup, class/visibility helpers, event binding
//! - [`log`] - Console logging

pub mod dom;
pub mod log;
