//! Observable state of the widget's two surfaces.
//!
//! The widget does not render anything itself; hosts read this state each
//! frame and mirror it into their own UI. Exactly one of the two surfaces is
//! visible at a time, driven by the mode controller.

use render_api::RenderFragment;

/// Accessibility role metadata for the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRole {
    /// Editing mode: the widget behaves as a multi-line textbox.
    Textbox,
    /// Viewing mode: the widget behaves as a read-only document.
    Document,
}

/// Live-region politeness of the viewer surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiveRegion {
    Off,
    Polite,
}

/// Target for focus requests; the editable surface is the only anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusAnchor {
    Editor,
}

/// Host-visible surface state for one widget instance.
#[derive(Clone, Debug)]
pub struct SurfaceState {
    editor_hidden: bool,
    viewer_hidden: bool,
    editor_editable: bool,
    role: SurfaceRole,
    multiline: bool,
    viewer_live: LiveRegion,
    editor_btn_enabled: bool,
    viewer_btn_enabled: bool,
    focus: Option<FocusAnchor>,
    viewer_content: RenderFragment,
    reported_message: Option<String>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        // Initial state is editor mode: editable surface visible, the
        // switch-to-editor control disabled because it is already active.
        Self {
            editor_hidden: false,
            viewer_hidden: true,
            editor_editable: true,
            role: SurfaceRole::Textbox,
            multiline: true,
            viewer_live: LiveRegion::Off,
            editor_btn_enabled: false,
            viewer_btn_enabled: true,
            focus: None,
            viewer_content: RenderFragment::default(),
            reported_message: None,
        }
    }
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the side effects of entering viewer mode.
    pub(crate) fn enter_viewer(&mut self) {
        self.editor_hidden = true;
        self.viewer_hidden = false;
        self.role = SurfaceRole::Document;
        self.multiline = false;
        self.viewer_live = LiveRegion::Polite;
        self.viewer_btn_enabled = false;
        self.editor_btn_enabled = true;
    }

    /// Apply the side effects of entering editor mode, including focusing
    /// the editable surface.
    pub(crate) fn enter_editor(&mut self) {
        self.editor_hidden = false;
        self.viewer_hidden = true;
        self.role = SurfaceRole::Textbox;
        self.multiline = true;
        self.viewer_live = LiveRegion::Off;
        self.viewer_btn_enabled = true;
        self.editor_btn_enabled = false;
        self.focus_editor();
    }

    pub(crate) fn focus_editor(&mut self) {
        self.focus = Some(FocusAnchor::Editor);
    }

    pub(crate) fn set_editable(&mut self, editable: bool) {
        self.editor_editable = editable;
    }

    pub(crate) fn set_viewer_content(&mut self, fragment: RenderFragment) {
        self.viewer_content = fragment;
    }

    pub(crate) fn set_reported_message(&mut self, message: String) {
        self.reported_message = Some(message);
    }

    pub fn editor_hidden(&self) -> bool {
        self.editor_hidden
    }

    pub fn viewer_hidden(&self) -> bool {
        self.viewer_hidden
    }

    /// Whether the editable surface accepts edits (false when the host form
    /// disabled the widget or `readonly` is set).
    pub fn editor_editable(&self) -> bool {
        self.editor_editable
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn viewer_live(&self) -> LiveRegion {
        self.viewer_live
    }

    pub fn editor_btn_enabled(&self) -> bool {
        self.editor_btn_enabled
    }

    pub fn viewer_btn_enabled(&self) -> bool {
        self.viewer_btn_enabled
    }

    /// Pending focus request, consumed by the host.
    pub fn take_focus(&mut self) -> Option<FocusAnchor> {
        self.focus.take()
    }

    /// Current content of the rendered preview.
    pub fn viewer_content(&self) -> &RenderFragment {
        &self.viewer_content
    }

    /// Last validation message surfaced by `report_validity`, if any.
    pub fn reported_message(&self) -> Option<&str> {
        self.reported_message.as_deref()
    }
}
