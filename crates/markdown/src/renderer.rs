//! Markdown to HTML conversion using pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};
use render_api::{RenderFragment, Renderer};

/// Options for markdown conversion.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled.
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }

    /// Convert to pulldown-cmark Options.
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// [`Renderer`] implementation over pulldown-cmark.
///
/// Stateless apart from its option set; every `parse` call walks the input
/// fresh, so equal input yields equal output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Renderer with no extensions enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with the given extension set.
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl Renderer for MarkdownRenderer {
    fn parse(&self, markup: &str) -> RenderFragment {
        log::trace!(target: "markdown.render", "parse {} bytes", markup.len());

        let parser = Parser::new_ext(markup, self.options.to_pulldown_options());
        let mut out = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut out, parser);
        RenderFragment::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading() {
        let renderer = MarkdownRenderer::new();
        let fragment = renderer.parse("# Hi");
        assert_eq!(fragment.html().trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn empty_input_renders_empty_fragment() {
        let renderer = MarkdownRenderer::new();
        assert!(renderer.parse("").is_empty());
    }

    #[test]
    fn same_input_renders_same_output() {
        let renderer = MarkdownRenderer::with_options(MarkdownOptions::all());
        let input = "a | b\n--- | ---\n1 | 2\n\n~~gone~~";
        assert_eq!(renderer.parse(input), renderer.parse(input));
    }

    #[test]
    fn strikethrough_requires_extension() {
        let plain = MarkdownRenderer::new().parse("~~gone~~");
        let ext = MarkdownRenderer::with_options(MarkdownOptions::all()).parse("~~gone~~");
        assert!(!plain.html().contains("<del>"));
        assert!(ext.html().contains("<del>"));
    }
}
