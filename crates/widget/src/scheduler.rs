//! Deferred-work queue for commits and renders.
//!
//! The widget is single-threaded and cooperative; the host pumps
//! [`MarkdownWidget::tick`](crate::MarkdownWidget::tick) as the
//! microtask-equivalent. Two kinds of work are deferred:
//!
//! - **Commits**: every edit stages the latest text; edits within the same
//!   tick coalesce into a single commit.
//! - **Renders**: a render request is the pipeline's one suspension point —
//!   it never runs inline, so a long parse cannot starve interaction
//!   handling queued ahead of it. A single in-flight slot serializes
//!   requests per instance; scheduling while one is queued folds into it.

#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    pending_commit: Option<String>,
    render_queued: bool,
}

impl Scheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stage `text` for the next commit, replacing any previously staged
    /// text from the same tick.
    pub(crate) fn stage_commit(&mut self, text: String) {
        self.pending_commit = Some(text);
    }

    /// Take the staged commit, if any.
    pub(crate) fn take_commit(&mut self) -> Option<String> {
        self.pending_commit.take()
    }

    /// Drop any staged commit without running it.
    ///
    /// Used when a programmatic assignment supersedes in-flight edits.
    pub(crate) fn cancel_commit(&mut self) {
        self.pending_commit = None;
    }

    /// Queue a render pass for the next tick.
    ///
    /// Returns `false` if one was already queued (the request coalesces).
    pub(crate) fn queue_render(&mut self) -> bool {
        let fresh = !self.render_queued;
        self.render_queued = true;
        fresh
    }

    /// Take the queued render, if any.
    pub(crate) fn take_render(&mut self) -> bool {
        std::mem::replace(&mut self.render_queued, false)
    }

    /// Returns `true` if no work is pending.
    pub(crate) fn is_idle(&self) -> bool {
        self.pending_commit.is_none() && !self.render_queued
    }
}
