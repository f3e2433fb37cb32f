//! Core site logic, independent of the document.
//!
//! This module provides:
//! - [`CounterSequence`] counter animation values
//! - [`validate_field`] and [`validate_form`] form validation
//! - [`Submission`] the form submission state machine
//! - [`filter_by_text`] and [`filter_by_tag`] list filtering
//! - [`Highlighter`] search-term highlighting
//! - [`Scheduler`] cancellable delayed tasks
//! - [`NotificationQueue`] the toast queue

pub mod counter;
pub mod error;
mod filter;
mod highlight;
pub mod nav;
mod notify;
mod scheduler;
mod submission;
mod validation;

pub use counter::CounterSequence;
pub use error::{DomError, SubmissionError};
pub use filter::{FilterOutcome, filter_by_tag, filter_by_text};
pub use highlight::Highlighter;
pub use nav::NavbarStyle;
pub use notify::{NotificationQueue, Pushed};
pub use scheduler::{Scheduler, TaskKey, Ticket};
pub use submission::Submission;
pub use validation::{is_valid_email, validate_field, validate_form};
