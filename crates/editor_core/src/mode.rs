//! The widget's display mode.

/// Display state of the widget: raw editing surface or rendered preview.
///
/// This is the only externally settable piece of view state. It is parsed
/// from the `mode` attribute; any value other than `"editor"` or `"viewer"`
/// is rejected at the widget boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The editable surface is visible and focusable.
    #[default]
    Editor,
    /// The rendered preview is visible; the editable surface is hidden.
    Viewer,
}

impl Mode {
    /// Parse an attribute value into a mode.
    ///
    /// Returns `None` for anything outside `{"editor", "viewer"}`. Matching
    /// is exact; attribute values are not case-folded.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "editor" => Some(Mode::Editor),
            "viewer" => Some(Mode::Viewer),
            _ => None,
        }
    }

    /// The attribute value this mode serializes to.
    pub const fn as_attr(self) -> &'static str {
        match self {
            Mode::Editor => "editor",
            Mode::Viewer => "viewer",
        }
    }
}
