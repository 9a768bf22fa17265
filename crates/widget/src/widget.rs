//! The widget state machine.
//!
//! One [`MarkdownWidget`] owns all mutable state for one element instance:
//! the attribute surface, the authoritative value, the computed validity,
//! the two display surfaces, and the deferred-work queue. Hosts drive it
//! through the lifecycle methods (`connected`, `set_attribute`, the
//! `form_*_callback`s) and the interaction methods (`input_edit`, `focus`,
//! `blur`, `tick`).

use crate::attrs::AttributeList;
use crate::blob::{Blob, File, MARKDOWN_MEDIA_TYPE};
use crate::error::WidgetError;
use crate::form::FormInternals;
use crate::scheduler::Scheduler;
use crate::surface::{FocusAnchor, SurfaceState};
use editor_core::{
    Constraints, Mode, ValidityState, ValueStore, dedent, evaluate, normalize_newlines,
    strip_surface_trailing,
};
use render_api::{RenderFragment, Renderer};

/// Externally observable widget events, drained by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The value was edited since the last notification and the widget lost
    /// focus. Fires at most once per dirty-then-blur cycle.
    Change,
}

/// A form-participating markdown editor widget.
pub struct MarkdownWidget<R: Renderer, F: FormInternals> {
    renderer: R,
    internals: F,
    attrs: AttributeList,
    store: ValueStore,
    validity: ValidityState,
    surface: SurfaceState,
    scheduler: Scheduler,
    events: Vec<WidgetEvent>,
    applied_mode: Mode,
    form_disabled: bool,
}

impl<R: Renderer, F: FormInternals> MarkdownWidget<R, F> {
    /// Capability marker: the widget participates in host forms.
    pub const FORM_ASSOCIATED: bool = true;

    /// Attributes whose changes trigger transition handlers. Changes to
    /// anything else (notably `minlength`/`maxlength`) are stored but take
    /// effect only at the next commit.
    pub const OBSERVED_ATTRIBUTES: [&'static str; 3] = ["mode", "readonly", "required"];

    pub fn new(renderer: R, internals: F) -> Self {
        Self {
            renderer,
            internals,
            attrs: AttributeList::new(),
            store: ValueStore::new(),
            validity: ValidityState::valid(),
            surface: SurfaceState::new(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
            applied_mode: Mode::Editor,
            form_disabled: false,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Seed the value from initial slotted content, once.
    ///
    /// Content starting with a newline is treated as host-indented and
    /// dedented before trimming. The seed is captured for [`Self::reset`].
    /// A second call, or a call after any commit, is a no-op.
    pub fn connected(&mut self, initial: Option<&str>) {
        if !self.store.is_unset() {
            return;
        }
        let Some(raw) = initial else {
            return;
        };

        let normalized = normalize_newlines(raw);
        let content = if normalized.starts_with('\n') {
            dedent(&normalized).trim().to_string()
        } else {
            normalized.trim().to_string()
        };
        if content.is_empty() {
            return;
        }

        self.store.capture_seed(content.clone());
        self.commit_value(content);
    }

    /// Set an attribute, dispatching the transition handler if the
    /// attribute is observed and its value actually changed.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let prev = self.attrs.set(name, value);
        let changed = match &prev {
            None => true,
            Some(old) => old.as_deref() != value,
        };
        if changed && Self::is_observed(name) {
            self.attribute_changed(name);
        }
    }

    /// Remove an attribute, dispatching the transition handler if observed.
    pub fn remove_attribute(&mut self, name: &str) {
        let prev = self.attrs.remove(name);
        if prev.is_some() && Self::is_observed(name) {
            self.attribute_changed(name);
        }
    }

    /// Invoked by the host when its form enables/disables the widget.
    ///
    /// Disable is OR-combined with the `readonly` attribute: either makes
    /// the editable surface non-editable.
    pub fn form_disabled_callback(&mut self, disabled: bool) {
        self.form_disabled = disabled;
        self.update_editable();
    }

    /// Invoked by the host when its form resets.
    pub fn form_reset_callback(&mut self) {
        self.reset();
    }

    /// Invoked by the host to restore persisted state (e.g. after
    /// navigation).
    pub fn form_state_restore_callback(&mut self, value: &str) {
        self.restore_state(value);
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Record a user edit of the editable surface.
    ///
    /// Marks the dirty flag and stages `text` for commit on the next tick;
    /// edits within the same tick coalesce into one commit of the latest
    /// text. Ignored while the surface is non-editable.
    pub fn input_edit(&mut self, text: &str) {
        if !self.surface.editor_editable() {
            return;
        }
        self.store.mark_dirty();
        self.scheduler.stage_commit(normalize_newlines(text));
    }

    /// Run deferred work: a staged commit first, then a queued render.
    ///
    /// The commit-before-render order guarantees a render pass always reads
    /// the committed value.
    pub fn tick(&mut self) {
        if let Some(text) = self.scheduler.take_commit() {
            self.commit_value(text);
        }
        if self.scheduler.take_render() {
            self.run_render();
        }
    }

    /// Focus the widget. While in viewer mode this switches back to the
    /// editor; the editable surface is focused either way.
    pub fn focus(&mut self) {
        if self.mode() != Mode::Editor {
            self.set_attribute("mode", Some(Mode::Editor.as_attr()));
        }
        self.surface.focus_editor();
    }

    /// Blur the widget, ending the focus session.
    ///
    /// A still-staged commit is flushed first, so a change notification is
    /// never observable before its commit. Emits [`WidgetEvent::Change`]
    /// exactly once if any edit occurred since the last notification.
    pub fn blur(&mut self) {
        if let Some(text) = self.scheduler.take_commit() {
            self.commit_value(text);
        }
        if self.store.take_dirty() {
            self.events.push(WidgetEvent::Change);
        }
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending focus request for the host to honor.
    pub fn take_focus(&mut self) -> Option<FocusAnchor> {
        self.surface.take_focus()
    }

    /// Returns `true` if a commit or render is still pending.
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_idle()
    }

    // ------------------------------------------------------------------
    // Mode
    // ------------------------------------------------------------------

    /// The current display mode; absent or unparsable `mode` attributes
    /// fall back to [`Mode::Editor`].
    pub fn mode(&self) -> Mode {
        self.attrs
            .get("mode")
            .and_then(|v| v.and_then(Mode::from_attr))
            .unwrap_or_default()
    }

    /// Switch to the named mode.
    ///
    /// Fails with [`WidgetError::InvalidMode`] for anything outside
    /// `{"editor", "viewer"}`, leaving all state unchanged. Switching to
    /// the already-active mode is a no-op.
    pub fn switch_to(&mut self, mode: &str) -> Result<(), WidgetError> {
        let mode = Mode::from_attr(mode).ok_or_else(|| WidgetError::InvalidMode {
            value: mode.to_string(),
        })?;
        self.set_attribute("mode", Some(mode.as_attr()));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Value
    // ------------------------------------------------------------------

    /// The current form value: the surface text with surface-introduced
    /// trailing newlines stripped.
    pub fn value(&self) -> &str {
        strip_surface_trailing(self.store.value())
    }

    /// Assign the value programmatically.
    ///
    /// Commits immediately (no debounce), superseding any staged edit, and
    /// queues a render when the viewer is showing.
    pub fn set_value(&mut self, value: &str) {
        self.scheduler.cancel_commit();
        self.commit_value(value.to_string());
        if self.mode() == Mode::Viewer {
            self.scheduler.queue_render();
        }
    }

    /// Restore the seed captured at connection, or clear the value if none
    /// was captured.
    pub fn reset(&mut self) {
        match self.store.seed().map(str::to_string) {
            Some(seed) => self.set_value(&seed),
            None => self.set_value(""),
        }
    }

    /// Apply a previously persisted value verbatim, without forcing a mode
    /// change.
    pub fn restore_state(&mut self, value: &str) {
        self.set_value(value);
    }

    /// Monotonic revision of the committed value.
    pub fn value_revision(&self) -> u64 {
        self.store.revision()
    }

    // ------------------------------------------------------------------
    // Validity
    // ------------------------------------------------------------------

    /// Current boolean validity; no visible side effect.
    pub fn check_validity(&self) -> bool {
        self.validity.is_valid()
    }

    /// Current boolean validity; when invalid, additionally surfaces the
    /// validation message and focuses the editable surface.
    pub fn report_validity(&mut self) -> bool {
        if self.validity.is_valid() {
            return true;
        }

        log::debug!(
            target: "widget.commit",
            "report validity: {}",
            self.validity.message()
        );
        self.surface
            .set_reported_message(self.validity.message().to_string());
        self.surface.focus_editor();
        false
    }

    pub fn validity(&self) -> &ValidityState {
        &self.validity
    }

    pub fn validation_message(&self) -> &str {
        self.validity.message()
    }

    /// Whether the widget participates in constraint validation.
    pub fn will_validate(&self) -> bool {
        !(self.form_disabled || self.disabled())
    }

    // ------------------------------------------------------------------
    // Form contract properties
    // ------------------------------------------------------------------

    pub fn name(&self) -> Option<&str> {
        self.attrs.get("name").flatten()
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        match name {
            Some(name) => self.set_attribute("name", Some(name)),
            None => self.remove_attribute("name"),
        }
    }

    pub fn required(&self) -> bool {
        self.attrs.has("required")
    }

    pub fn set_required(&mut self, required: bool) {
        self.toggle_attribute("required", required);
    }

    pub fn read_only(&self) -> bool {
        self.attrs.has("readonly")
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.toggle_attribute("readonly", read_only);
    }

    pub fn disabled(&self) -> bool {
        self.attrs.has("disabled")
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.toggle_attribute("disabled", disabled);
    }

    /// Minimum length bound, or `-1` when unbounded.
    pub fn min_length(&self) -> i32 {
        self.attrs.int("minlength")
    }

    /// Set the bound; negative values remove the attribute.
    pub fn set_min_length(&mut self, value: i32) {
        if value >= 0 {
            self.set_attribute("minlength", Some(&value.to_string()));
        } else {
            self.remove_attribute("minlength");
        }
    }

    /// Maximum length bound, or `-1` when unbounded.
    pub fn max_length(&self) -> i32 {
        self.attrs.int("maxlength")
    }

    /// Set the bound; negative values remove the attribute.
    pub fn set_max_length(&mut self, value: i32) {
        if value >= 0 {
            self.set_attribute("maxlength", Some(&value.to_string()));
        } else {
            self.remove_attribute("maxlength");
        }
    }

    pub fn labels(&self) -> &[String] {
        self.internals.labels()
    }

    pub fn form(&self) -> Option<&str> {
        self.internals.form()
    }

    // ------------------------------------------------------------------
    // Blob I/O
    // ------------------------------------------------------------------

    /// Export the current value as a `text/markdown` blob.
    pub fn to_blob(&self) -> Blob {
        Blob::from_text(self.value(), MARKDOWN_MEDIA_TYPE)
    }

    /// Export the current value as a named `text/markdown` file.
    pub fn to_file(&self, name: &str) -> File {
        File::new(name, self.to_blob())
    }

    /// Import a blob's text content as the value, returning the text.
    ///
    /// Fails with [`WidgetError::TypeMismatch`] if the bytes are not UTF-8
    /// text; widget state is unchanged on failure.
    pub fn import_blob(&mut self, blob: &Blob) -> Result<String, WidgetError> {
        let text = blob
            .text()
            .map_err(|_| WidgetError::TypeMismatch {
                expected: "UTF-8 text content",
            })?
            .to_string();
        self.set_value(&text);
        Ok(text)
    }

    // ------------------------------------------------------------------
    // Surfaces & rendering
    // ------------------------------------------------------------------

    /// Host-visible surface state.
    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    /// Render the current value directly, bypassing the scheduler.
    ///
    /// Mirrors the renderer's purity: does not touch the viewer surface.
    pub fn html(&self) -> RenderFragment {
        self.renderer.parse(self.value())
    }

    /// The host-form internals this widget propagates into.
    pub fn internals(&self) -> &F {
        &self.internals
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Add or remove a presence-only attribute, dispatching the transition
    /// handler if the attribute is observed and presence actually changed.
    fn toggle_attribute(&mut self, name: &str, on: bool) {
        if self.attrs.toggle(name, on) && Self::is_observed(name) {
            self.attribute_changed(name);
        }
    }

    fn is_observed(name: &str) -> bool {
        Self::OBSERVED_ATTRIBUTES
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Named transition handler for observed attribute changes.
    fn attribute_changed(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("mode") {
            // The attribute path is lenient: anything but "viewer" lands in
            // editor mode. `switch_to` is the validating entry point.
            let target = match self.attrs.get("mode") {
                Some(Some("viewer")) => Mode::Viewer,
                _ => Mode::Editor,
            };
            self.apply_mode(target);
        } else if name.eq_ignore_ascii_case("readonly") {
            self.update_editable();
        }

        // Every observed attribute change refreshes validity, keeping it
        // consistent with the committed value.
        self.refresh_validity();
    }

    fn apply_mode(&mut self, target: Mode) {
        if target == self.applied_mode {
            log::trace!(target: "widget.mode", "already in {:?}, no-op", target);
            return;
        }

        match target {
            Mode::Viewer => {
                self.scheduler.queue_render();
                self.surface.enter_viewer();
            }
            Mode::Editor => {
                self.surface.enter_editor();
            }
        }
        log::debug!(target: "widget.mode", "{:?} -> {:?}", self.applied_mode, target);
        self.applied_mode = target;
    }

    fn commit_value(&mut self, text: String) {
        let changed = self.store.commit(text);
        log::debug!(
            target: "widget.commit",
            "commit rev={} changed={}",
            self.store.revision(),
            changed
        );
        self.internals.set_form_value(self.store.value());
        self.refresh_validity();
    }

    fn refresh_validity(&mut self) {
        let constraints = self.constraints();
        self.validity = evaluate(self.store.value(), &constraints);
        let anchor = (!self.validity.is_valid()).then_some(FocusAnchor::Editor);
        self.internals.set_validity(&self.validity, anchor);
    }

    fn constraints(&self) -> Constraints {
        Constraints {
            required: self.attrs.has("required"),
            min_length: self.attrs.int("minlength"),
            max_length: self.attrs.int("maxlength"),
        }
    }

    fn update_editable(&mut self) {
        self.surface
            .set_editable(!(self.form_disabled || self.read_only()));
    }

    fn run_render(&mut self) {
        let fragment = self.renderer.parse(strip_surface_trailing(self.store.value()));
        log::debug!(
            target: "widget.render",
            "render pass, {} bytes of output",
            fragment.html().len()
        );
        self.surface.set_viewer_content(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::HostForm;

    struct EchoRenderer;

    impl Renderer for EchoRenderer {
        fn parse(&self, markup: &str) -> RenderFragment {
            RenderFragment::new(format!("<pre>{markup}</pre>"))
        }
    }

    fn widget() -> MarkdownWidget<EchoRenderer, HostForm> {
        MarkdownWidget::new(EchoRenderer, HostForm::new())
    }

    #[test]
    fn edits_coalesce_into_one_commit_per_tick() {
        let mut w = widget();
        w.input_edit("a");
        w.input_edit("ab");
        w.input_edit("abc");
        assert_eq!(w.value(), "");
        assert_eq!(w.value_revision(), 0);

        w.tick();
        assert_eq!(w.value(), "abc");
        assert_eq!(w.value_revision(), 1);
        assert_eq!(w.internals().value(), "abc");
    }

    #[test]
    fn set_value_commits_immediately_and_supersedes_staged_edits() {
        let mut w = widget();
        w.input_edit("typed");
        w.set_value("assigned");
        assert_eq!(w.value(), "assigned");

        // The stale staged edit must not resurface on the next tick.
        w.tick();
        assert_eq!(w.value(), "assigned");
    }

    #[test]
    fn connected_seeds_once_and_captures_the_seed() {
        let mut w = widget();
        w.connected(Some("\n\t# Title\n\tbody\n"));
        assert_eq!(w.value(), "# Title\nbody");

        w.set_value("edited");
        w.connected(Some("other"));
        assert_eq!(w.value(), "edited");

        w.reset();
        assert_eq!(w.value(), "# Title\nbody");
    }

    #[test]
    fn connected_accepts_mixed_width_whitespace_indentation() {
        let mut w = widget();
        w.connected(Some("\n\ta\n\u{a0}b"));
        assert_eq!(w.value(), "a\nb");
    }

    #[test]
    fn reset_without_seed_clears_the_value() {
        let mut w = widget();
        w.set_value("something");
        w.reset();
        assert_eq!(w.value(), "");
    }

    #[test]
    fn readonly_and_form_disable_both_block_edits() {
        let mut w = widget();

        w.set_read_only(true);
        assert!(!w.surface().editor_editable());
        w.input_edit("ignored");
        w.tick();
        assert_eq!(w.value(), "");

        w.set_read_only(false);
        assert!(w.surface().editor_editable());

        w.form_disabled_callback(true);
        assert!(!w.surface().editor_editable());
        w.form_disabled_callback(false);
        assert!(w.surface().editor_editable());
    }

    #[test]
    fn minlength_change_does_not_refresh_validity_until_commit() {
        let mut w = widget();
        w.set_value("ab");
        assert!(w.check_validity());

        // Not in the observed set: validity stays stale by design.
        w.set_min_length(5);
        assert!(w.check_validity());

        // The next commit picks the bound up.
        w.set_value("ab");
        assert!(!w.check_validity());
    }

    #[test]
    fn required_change_refreshes_validity_immediately() {
        let mut w = widget();
        assert!(w.check_validity());
        w.set_required(true);
        assert!(!w.check_validity());
        w.set_required(false);
        assert!(w.check_validity());
    }

    #[test]
    fn presence_setters_are_idempotent() {
        let mut w = widget();
        w.set_required(true);
        w.set_required(true);
        assert!(w.required());
        assert!(!w.check_validity());

        w.set_required(false);
        w.set_required(false);
        assert!(!w.required());
        assert!(w.check_validity());
    }

    #[test]
    fn report_validity_surfaces_message_and_focus() {
        let mut w = widget();
        w.set_required(true);

        assert!(!w.report_validity());
        assert_eq!(w.surface().reported_message(), Some("This is a required field."));
        assert_eq!(w.take_focus(), Some(FocusAnchor::Editor));
    }

    #[test]
    fn focus_in_viewer_mode_returns_to_editor() {
        let mut w = widget();
        w.switch_to("viewer").unwrap();
        assert_eq!(w.mode(), Mode::Viewer);

        w.focus();
        assert_eq!(w.mode(), Mode::Editor);
        assert_eq!(w.take_focus(), Some(FocusAnchor::Editor));
    }

    #[test]
    fn length_setters_follow_attribute_semantics() {
        let mut w = widget();
        assert_eq!(w.min_length(), -1);

        w.set_min_length(5);
        w.set_max_length(10);
        assert_eq!(w.min_length(), 5);
        assert_eq!(w.max_length(), 10);

        w.set_min_length(-1);
        assert_eq!(w.min_length(), -1);
    }

    #[test]
    fn will_validate_reflects_disablement() {
        let mut w = widget();
        assert!(w.will_validate());
        w.form_disabled_callback(true);
        assert!(!w.will_validate());
        w.form_disabled_callback(false);
        w.set_disabled(true);
        assert!(!w.will_validate());
    }
}
