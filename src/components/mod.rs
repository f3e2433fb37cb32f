//! Behaviors bound to the static site markup.
//!
//! - [`navigation`] - Anchor scrolling, navbar styling, mobile menu
//! - [`reveal`] - Scroll-triggered `animated` markers
//! - [`counters`] - Statistic count-up animation
//! - [`forms`] - Validation and simulated submission
//! - [`blog`] - Blog search, category filter, load more
//! - [`faq`] - FAQ search with highlighting, category links
//! - [`Toaster`] - Non-blocking notification stack (Leptos component)

pub mod blog;
pub mod counters;
pub mod faq;
pub mod forms;
pub mod navigation;
pub mod reveal;
mod toast;

pub use toast::Toaster;
