//! Theme stylesheets for the rendered preview.

use render_api::StyleSheet;

const GITHUB_LIGHT: &str = "\
.markdown-body { color: #1f2328; background-color: #ffffff; }\n\
.markdown-body a { color: #0969da; }\n\
.markdown-body pre, .markdown-body code { background-color: #f6f8fa; }\n\
.markdown-body blockquote { color: #59636e; border-left: 0.25em solid #d1d9e0; }\n";

const GITHUB_DARK: &str = "\
.markdown-body { color: #f0f6fc; background-color: #0d1117; }\n\
.markdown-body a { color: #4493f8; }\n\
.markdown-body pre, .markdown-body code { background-color: #151b23; }\n\
.markdown-body blockquote { color: #9198a1; border-left: 0.25em solid #3d444d; }\n";

/// Build the stylesheet for a named theme, optionally gated by a media query.
///
/// Known themes are `"github"` (light) and `"github-dark"`; anything else
/// falls back to the light variant. The widget core treats the result
/// opaquely, so theme selection is entirely a host concern.
pub fn create_style_sheet(theme: &str, media: Option<&str>) -> StyleSheet {
    let css = match theme {
        "github-dark" => GITHUB_DARK,
        "github" => GITHUB_LIGHT,
        other => {
            log::debug!(target: "markdown.theme", "unknown theme {other:?}, using light");
            GITHUB_LIGHT
        }
    };

    StyleSheet::new(theme, media.map(str::to_string), css)
}
