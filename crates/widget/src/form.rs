//! The capability interface the widget calls on its host form.
//!
//! Any host UI framework that supports custom form-associated elements can
//! implement [`FormInternals`]; the widget pushes its committed value and
//! validity through it and reads back the pieces the host owns (labels, the
//! owning form). [`HostForm`] is the in-memory implementation used by demos
//! and tests.

use crate::surface::FocusAnchor;
use editor_core::ValidityState;

/// Host-form internals the widget participates through.
pub trait FormInternals {
    /// Receive the committed form value.
    fn set_form_value(&mut self, value: &str);

    /// Receive the recomputed validity.
    ///
    /// `anchor` names the surface to focus on `report_validity`; it is
    /// present exactly when a violation flag is set.
    fn set_validity(&mut self, state: &ValidityState, anchor: Option<FocusAnchor>);

    /// Labels associated with the widget, host-owned.
    fn labels(&self) -> &[String] {
        &[]
    }

    /// Identifier of the owning form, if the widget is inside one.
    fn form(&self) -> Option<&str> {
        None
    }
}

/// In-memory [`FormInternals`] for demos and tests.
#[derive(Clone, Debug, Default)]
pub struct HostForm {
    value: String,
    validity: ValidityState,
    anchor: Option<FocusAnchor>,
    labels: Vec<String>,
    form: Option<String>,
}

impl HostForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host form with an owning form identifier.
    pub fn with_form(form: impl Into<String>) -> Self {
        Self {
            form: Some(form.into()),
            ..Self::default()
        }
    }

    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// The last value the widget propagated.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The last validity the widget propagated.
    pub fn validity(&self) -> &ValidityState {
        &self.validity
    }

    /// The focus anchor accompanying the last validity, if invalid.
    pub fn anchor(&self) -> Option<FocusAnchor> {
        self.anchor
    }
}

impl FormInternals for HostForm {
    fn set_form_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_validity(&mut self, state: &ValidityState, anchor: Option<FocusAnchor>) {
        self.validity = state.clone();
        self.anchor = anchor;
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }
}
