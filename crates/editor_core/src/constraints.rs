//! Validation constraints read from the widget's attribute surface.

/// Sentinel meaning "no bound" for `min_length`/`max_length`.
pub const UNBOUNDED: i32 = -1;

/// Constraint set applied to the committed value.
///
/// Supplied via attributes and read at validity-computation time; this
/// struct is a point-in-time snapshot, not a live view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    /// Whether an empty (after trimming) value is a violation.
    pub required: bool,
    /// Minimum length in Unicode scalar values, or [`UNBOUNDED`].
    pub min_length: i32,
    /// Maximum length in Unicode scalar values, or [`UNBOUNDED`].
    pub max_length: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: false,
            min_length: UNBOUNDED,
            max_length: UNBOUNDED,
        }
    }
}

impl Constraints {
    /// Returns `true` if a minimum length bound is in effect.
    pub fn has_min(&self) -> bool {
        self.min_length != UNBOUNDED
    }

    /// Returns `true` if a maximum length bound is in effect.
    pub fn has_max(&self) -> bool {
        self.max_length != UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_are_unbounded() {
        let c = Constraints::default();
        assert!(!c.required);
        assert!(!c.has_min());
        assert!(!c.has_max());
    }
}
