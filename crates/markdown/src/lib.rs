//! # markdown
//!
//! Markdown renderer for the editor widget, backed by `pulldown-cmark`.
//!
//! This crate lives outside the widget core on purpose: the core only knows
//! the [`render_api::Renderer`] seam and treats the output opaquely. Theme
//! stylesheets for the rendered preview come from [`create_style_sheet`].

mod renderer;
mod theme;

pub use renderer::{MarkdownOptions, MarkdownRenderer};
pub use theme::create_style_sheet;
