//! # editor_core
//!
//! UI-agnostic state layer for the markdown editor widget.
//!
//! This crate provides the fundamental building blocks for the widget's
//! internal state machine:
//! - [`Mode`]: The editor/viewer display state
//! - [`ValueStore`]: The authoritative raw markup value with dirty tracking
//! - [`Constraints`] and [`evaluate`]: Pure constraint-based validity
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any rendering or markup-parsing machinery
//! - The form-participation layer
//! - Platform-specific APIs
//!
//! It depends only on `std` and provides pure state semantics that can be
//! tested independently and reused across different widget hosts.

mod constraints;
mod mode;
mod text;
mod validity;
mod value;

pub use constraints::{Constraints, UNBOUNDED};
pub use mode::Mode;
pub use validity::{ValidityFlag, ValidityState, evaluate};
pub use value::ValueStore;

// Re-export text utilities for use by host layers that seed or read back
// surface content.
pub use text::{dedent, normalize_newlines, strip_surface_trailing};
