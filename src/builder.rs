use std::path::PathBuf;

use crate::engine::Visitor;
use crate::entry::Entry;
use crate::error::VisitError;
use crate::events::{Decision, Observers, Session};
use crate::fs::FsLister;
use crate::results::Results;
use crate::traits::{DirectoryLister, Matcher};

// ---------------------------------------------------------------------------
// VisitBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring a traversal.
///
/// Created via [`fsvisit::visit()`](crate::visit). Chain configuration calls,
/// then either [`run()`](VisitBuilder::run) for a one-shot search or
/// [`build()`](VisitBuilder::build) for a reusable [`Visitor`].
///
/// # Example
///
/// ```rust,ignore
/// let results = fsvisit::visit("/var/log")
///     .matching("error")
///     .on_directory_found(|d| {
///         if d.path.ends_with("archive") {
///             d.exclude = true; // don't descend
///         }
///     })
///     .run()?;
/// ```
pub struct VisitBuilder {
    root: PathBuf,
    lister: Option<Box<dyn DirectoryLister>>,
    matcher: Option<Box<dyn Matcher>>,
    observers: Observers,
}

impl VisitBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            lister: None,
            matcher: None,
            observers: Observers::default(),
        }
    }

    // ── Collaborators ─────────────────────────────────────────────────────

    /// Replace the default filesystem lister.
    ///
    /// Any type implementing [`DirectoryLister`] is accepted, such as an
    /// in-memory fixture or an instrumented wrapper. When omitted, the
    /// engine lists real directories via [`FsLister`].
    pub fn lister(mut self, l: impl DirectoryLister + 'static) -> Self {
        self.lister = Some(Box::new(l));
        self
    }

    /// Set the match predicate.
    ///
    /// Any type implementing [`Matcher`] is accepted, including plain
    /// `Fn(&Entry) -> bool` closures. A rejected directory is pruned with
    /// its whole subtree, so a predicate meant for files usually accepts
    /// directories unconditionally.
    ///
    /// For the common case of substring matching, prefer `.matching()`.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    /// Shorthand for substring matching on the entry name.
    ///
    /// Equivalent to `.with_matcher(SubstringMatcher::new(pattern))`.
    /// Matching is case-insensitive. Note the pruning caveat on
    /// [`with_matcher`](VisitBuilder::with_matcher): a directory whose name
    /// misses the pattern is skipped along with everything beneath it.
    pub fn matching(mut self, pattern: impl Into<String>) -> Self {
        self.matcher = Some(Box::new(SubstringMatcher {
            pattern: pattern.into().to_lowercase(),
        }));
        self
    }

    // ── Observation points ────────────────────────────────────────────────

    /// Fires once before the root is listed. Setting
    /// [`Session::stop_search`] here means no directory is ever listed.
    pub fn on_search_started(mut self, hook: impl FnMut(&mut Session) + 'static) -> Self {
        self.observers.search_started.push(Box::new(hook));
        self
    }

    /// Fires exactly once after the walk completes or is stopped.
    pub fn on_search_finished(mut self, hook: impl FnMut(&mut Session) + 'static) -> Self {
        self.observers.search_finished.push(Box::new(hook));
        self
    }

    /// Fires when a file is discovered, before the predicate is consulted.
    pub fn on_file_found(mut self, hook: impl FnMut(&mut Decision) + 'static) -> Self {
        self.observers.file_found.push(Box::new(hook));
        self
    }

    /// Fires when a discovered file has passed the predicate and was not
    /// excluded. Last chance to drop the file from the result.
    pub fn on_file_filtered(mut self, hook: impl FnMut(&mut Decision) + 'static) -> Self {
        self.observers.file_filtered.push(Box::new(hook));
        self
    }

    /// Fires when a directory is discovered, before the predicate is
    /// consulted and before any descent. Excluding here prunes the subtree.
    pub fn on_directory_found(mut self, hook: impl FnMut(&mut Decision) + 'static) -> Self {
        self.observers.directory_found.push(Box::new(hook));
        self
    }

    /// Fires after a directory's subtree has completed. Excluding here drops
    /// only the directory's own entry; children already produced stay.
    pub fn on_directory_filtered(mut self, hook: impl FnMut(&mut Decision) + 'static) -> Self {
        self.observers.directory_filtered.push(Box::new(hook));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Finish configuration.
    ///
    /// The returned [`Visitor`] holds no per-search state, so
    /// [`search()`](Visitor::search) can be called on it repeatedly with
    /// independent, identical behavior.
    pub fn build(self) -> Visitor {
        Visitor {
            root: self.root,
            lister: self.lister.unwrap_or_else(|| Box::new(FsLister)),
            matcher: self.matcher.unwrap_or_else(|| Box::new(AllMatcher)),
            observers: self.observers,
        }
    }

    /// Build and run a single search.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the root or any accepted subdirectory cannot be
    /// listed. The failure names the offending path; nothing collected
    /// before it is returned.
    pub fn run(self) -> Result<Results, VisitError> {
        self.build().search()
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Matches entries whose name contains `pattern` (case-insensitive).
struct SubstringMatcher {
    pattern: String,
}

impl Matcher for SubstringMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.name.to_lowercase().contains(&self.pattern)
    }
}

/// Matches every entry. Used when no matcher is specified.
struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &Entry) -> bool {
        true
    }
}
