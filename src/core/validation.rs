//! Field and form validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FieldKind, FormField, Validity};

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validate a single field.
///
/// - required and empty (after trimming) → invalid
/// - email, non-empty, not email-shaped → invalid
/// - otherwise valid
pub fn validate_field(field: &FormField) -> Validity {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Validity::Invalid;
    }
    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Validity::Invalid;
    }
    Validity::Valid
}

/// Outcome of validating a whole form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReport {
    /// Per-field validity; `Unvalidated` for fields that are not required
    pub fields: Vec<Validity>,
    /// Logical AND over the required fields
    pub valid: bool,
}

/// Validate every required field, without short-circuiting, so each one
/// gets its own marker.
pub fn validate_form(fields: &[FormField]) -> FormReport {
    let fields: Vec<Validity> = fields
        .iter()
        .map(|f| {
            if f.required {
                validate_field(f)
            } else {
                Validity::Unvalidated
            }
        })
        .collect();
    let valid = !fields.contains(&Validity::Invalid);
    FormReport { fields, valid }
}
