//! Error types for the site behaviors.
//!
//! Validation failures are not errors; they surface as field markers.
//! These types cover the remaining faults:
//!
//! - [`DomError`] - Browser/document access from the binding layer
//! - [`SubmissionError`] - Illegal form submission state transitions

use thiserror::Error;

use super::submission::SubmissionPhase;

/// Faults raised while reading or writing the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("document not available")]
    NoDocument,
    /// `querySelector` rejected the selector
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
    /// Any other JavaScript exception
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Rejected transitions of the form submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// A submission is already submitting or showing its success state
    #[error("a submission is already in flight ({0:?})")]
    AlreadyInFlight(SubmissionPhase),
    /// Transition not allowed from the current phase
    #[error("cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },
}
