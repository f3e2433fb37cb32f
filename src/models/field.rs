//! Form field state used by the validator.

/// Kind of value a field holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Generic text (inputs, textareas, selects)
    #[default]
    Text,
    /// `type="email"` input
    Email,
}

impl FieldKind {
    /// Derive the kind from an input's `type` attribute.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

/// Result of the most recent validation of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// Never validated (or markers cleared after a reset)
    #[default]
    Unvalidated,
}

/// Snapshot of a form control read from the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

#[cfg(test)]
impl FormField {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            required: false,
            kind: FieldKind::Text,
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            required: false,
            kind: FieldKind::Email,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_input_type() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
    }

    #[test]
    fn test_default_validity_is_unvalidated() {
        assert_eq!(Validity::default(), Validity::Unvalidated);
    }
}
