//! # render_api
//!
//! The seam between the widget core and markup renderers.
//!
//! The widget treats rendering as an external collaborator: it hands raw
//! markup to a [`Renderer`] and swaps the returned [`RenderFragment`] into
//! its viewer surface wholesale. The core never inspects fragment contents,
//! and stylesheets produced by renderer companions are equally opaque to it.

/// Rendered output ready to replace the viewer surface's content.
///
/// Produced fresh on every render pass; the scheduler performs no caching or
/// incremental diffing, so equivalent input yields equivalent fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderFragment {
    html: String,
}

impl RenderFragment {
    /// Wrap rendered markup.
    pub fn new(html: String) -> Self {
        Self { html }
    }

    /// The rendered markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Returns `true` if the fragment holds no content.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl From<String> for RenderFragment {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

/// A theme stylesheet produced by a renderer companion.
///
/// Carries the theme name, an optional media query gating where it applies,
/// and the stylesheet text. The widget core treats this opaquely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    theme: String,
    media: Option<String>,
    css: String,
}

impl StyleSheet {
    /// Build a stylesheet for `theme`, optionally gated by a media query.
    pub fn new(theme: impl Into<String>, media: Option<String>, css: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            media,
            css: css.into(),
        }
    }

    /// The theme this stylesheet belongs to.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Media query gating where the stylesheet applies, if any.
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    /// The stylesheet text.
    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Converts raw markup text into renderable content.
///
/// Implementations are assumed pure: the same input produces equivalent
/// output, and `parse` is synchronous from the caller's perspective once the
/// widget's scheduler has yielded.
pub trait Renderer {
    fn parse(&self, markup: &str) -> RenderFragment;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_wraps_markup() {
        let fragment = RenderFragment::from("<h1>Hi</h1>".to_string());
        assert_eq!(fragment.html(), "<h1>Hi</h1>");
        assert!(!fragment.is_empty());
        assert!(RenderFragment::default().is_empty());
    }

    #[test]
    fn stylesheet_exposes_theme_and_media() {
        let sheet = StyleSheet::new(
            "github",
            Some("(prefers-color-scheme: light)".to_string()),
            "body { color: #000; }",
        );
        assert_eq!(sheet.theme(), "github");
        assert_eq!(sheet.media(), Some("(prefers-color-scheme: light)"));
        assert!(!sheet.css().is_empty());
    }
}
