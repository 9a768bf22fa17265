//! # widget
//!
//! The form-participating markdown editor widget state machine.
//!
//! [`MarkdownWidget`] composes the UI-agnostic state layer from
//! `editor_core` with a host-provided renderer and form internals:
//! - mode switching between the editable surface and the rendered preview,
//! - debounced value commits with at-most-one change event per focus session,
//! - constraint validity kept consistent with the committed value,
//! - the host-form contract (value, validity, reset, disabled, restore).
//!
//! ## Concurrency model
//!
//! Single-threaded and cooperative. The host drives [`MarkdownWidget::tick`]
//! as the microtask-equivalent pump; edit commits and render passes are the
//! only deferred work, and both run widget-local effects only, so pending
//! work after teardown is harmless.

mod attrs;
mod blob;
mod error;
mod form;
mod scheduler;
mod surface;
mod widget;

pub use attrs::AttributeList;
pub use blob::{Blob, File, MARKDOWN_MEDIA_TYPE};
pub use error::WidgetError;
pub use form::{FormInternals, HostForm};
pub use surface::{FocusAnchor, LiveRegion, SurfaceRole, SurfaceState};
pub use widget::{MarkdownWidget, WidgetEvent};
