//! Errors for widget operations.
//!
//! Both kinds are fatal to the call and leave widget state unchanged.
//! Validity violations are not errors; they are observable state surfaced
//! through the form contract.

#[derive(Debug)]
pub enum WidgetError {
    /// A mode was requested outside `{editor, viewer}`.
    InvalidMode { value: String },
    /// Imported content is not of the expected kind (e.g. a blob whose
    /// bytes are not UTF-8 text).
    TypeMismatch { expected: &'static str },
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::InvalidMode { value } => {
                write!(f, "invalid view option: {value:?}")
            }
            WidgetError::TypeMismatch { expected } => {
                write!(f, "type mismatch: expected {expected}")
            }
        }
    }
}

impl std::error::Error for WidgetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_mode() {
        let err = WidgetError::InvalidMode {
            value: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "invalid view option: \"bogus\"");
    }
}
