//! Pure constraint-based validity computation.
//!
//! Validity violations are recoverable, observable state, not errors. The
//! widget recomputes this state on every committed value change and exposes
//! it through its form-participation surface.

use crate::constraints::Constraints;

/// A single named constraint violation.
///
/// At most one flag is set at a time; the rules in [`evaluate`] are applied
/// in a fixed order and the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidityFlag {
    /// `required` is set and the trimmed value is empty.
    ValueMissing,
    /// The value is shorter than the `minlength` bound.
    TooShort,
    /// The value is longer than the `maxlength` bound.
    TooLong,
}

/// Computed validity of the committed value against its constraints.
///
/// Holds the winning violation flag (if any) and a human-readable message.
/// An empty state (`flag == None`) means the value is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidityState {
    flag: Option<ValidityFlag>,
    message: String,
}

impl ValidityState {
    /// The valid (no violation) state.
    pub fn valid() -> Self {
        Self::default()
    }

    fn violation(flag: ValidityFlag, message: String) -> Self {
        Self {
            flag: Some(flag),
            message,
        }
    }

    /// Returns `true` if no violation flag is set.
    pub fn is_valid(&self) -> bool {
        self.flag.is_none()
    }

    /// The winning violation flag, if any.
    pub fn flag(&self) -> Option<ValidityFlag> {
        self.flag
    }

    /// Human-readable description of the violation; empty when valid.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Evaluate `value` against `constraints`.
///
/// Rule order (first match wins):
/// 1. `required` and trimmed value empty → [`ValidityFlag::ValueMissing`]
/// 2. bounded `min_length` and value shorter → [`ValidityFlag::TooShort`]
/// 3. bounded `max_length` and value longer → [`ValidityFlag::TooLong`]
/// 4. otherwise valid
///
/// Length is measured in Unicode scalar values, not bytes, so multi-byte
/// input counts the way a user counts characters.
pub fn evaluate(value: &str, constraints: &Constraints) -> ValidityState {
    if constraints.required && value.trim().is_empty() {
        return ValidityState::violation(
            ValidityFlag::ValueMissing,
            "This is a required field.".to_string(),
        );
    }

    let len = value.chars().count();

    if constraints.has_min() && len < constraints.min_length as usize {
        return ValidityState::violation(
            ValidityFlag::TooShort,
            format!(
                "This requires a length of at least {} characters",
                constraints.min_length
            ),
        );
    }

    if constraints.has_max() && len > constraints.max_length as usize {
        return ValidityState::violation(
            ValidityFlag::TooLong,
            format!(
                "This requires a length of at most {} characters",
                constraints.max_length
            ),
        );
    }

    ValidityState::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::UNBOUNDED;

    fn constraints(required: bool, min: i32, max: i32) -> Constraints {
        Constraints {
            required,
            min_length: min,
            max_length: max,
        }
    }

    #[test]
    fn unconstrained_value_is_valid() {
        let state = evaluate("", &Constraints::default());
        assert!(state.is_valid());
        assert_eq!(state.flag(), None);
        assert_eq!(state.message(), "");
    }

    #[test]
    fn required_empty_value_is_value_missing() {
        let state = evaluate("", &constraints(true, UNBOUNDED, UNBOUNDED));
        assert_eq!(state.flag(), Some(ValidityFlag::ValueMissing));
        assert!(!state.is_valid());
        assert!(!state.message().is_empty());
    }

    #[test]
    fn required_whitespace_only_value_is_value_missing() {
        let state = evaluate("  \n\t ", &constraints(true, UNBOUNDED, UNBOUNDED));
        assert_eq!(state.flag(), Some(ValidityFlag::ValueMissing));
    }

    #[test]
    fn required_nonempty_value_is_valid() {
        let state = evaluate("x", &constraints(true, UNBOUNDED, UNBOUNDED));
        assert!(state.is_valid());
    }

    #[test]
    fn min_and_max_bounds_partition_lengths() {
        let c = constraints(false, 5, 10);

        assert_eq!(evaluate("abcd", &c).flag(), Some(ValidityFlag::TooShort));
        assert_eq!(
            evaluate("abcdefghijk", &c).flag(),
            Some(ValidityFlag::TooLong)
        );
        assert!(evaluate("abcdefg", &c).is_valid());
    }

    #[test]
    fn boundary_lengths_are_valid() {
        let c = constraints(false, 5, 10);
        assert!(evaluate("abcde", &c).is_valid());
        assert!(evaluate("abcdefghij", &c).is_valid());
    }

    #[test]
    fn value_missing_wins_over_too_short() {
        let state = evaluate("", &constraints(true, 5, UNBOUNDED));
        assert_eq!(state.flag(), Some(ValidityFlag::ValueMissing));
    }

    #[test]
    fn unbounded_sentinel_disables_length_rules() {
        let c = constraints(false, UNBOUNDED, UNBOUNDED);
        assert!(evaluate("", &c).is_valid());
        assert!(evaluate(&"x".repeat(10_000), &c).is_valid());
    }

    #[test]
    fn length_is_measured_in_scalar_values() {
        // "€€€€" is 4 chars but 12 bytes; a max of 4 must accept it.
        let c = constraints(false, UNBOUNDED, 4);
        assert!(evaluate("€€€€", &c).is_valid());
        assert_eq!(evaluate("€€€€€", &c).flag(), Some(ValidityFlag::TooLong));
    }
}
