use std::path::Path;

use crate::entry::Entry;
use crate::error::VisitError;

/// Supplies the immediate children of a directory.
///
/// Implement this to drive the engine from anything tree-shaped: the real
/// filesystem ([`FsLister`](crate::fs::FsLister)), an in-memory fixture, an
/// archive index, a remote listing, and so on.
///
/// # Contract
///
/// * Return only the immediate children of `dir`. The engine drives descent
///   itself, one `list` call per directory it decides to enter.
/// * The returned order is preserved for siblings; the engine imposes no sort.
/// * Classify every child as [`File`](crate::entry::EntryKind::File) or
///   [`Directory`](crate::entry::EntryKind::Directory). Children reported as
///   [`Undefined`](crate::entry::EntryKind::Undefined) are invisible to the
///   walk.
///
/// # Error Handling
///
/// A directory that cannot be listed (missing, unreadable) must come back as
/// `Err`; [`VisitError::from_io`] classifies raw I/O errors into the crate
/// taxonomy. Any listing error aborts the whole search and no partial result
/// survives.
///
/// # Object Safety
///
/// `DirectoryLister` is object-safe; the builder stores listers as
/// `Box<dyn DirectoryLister>`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
///
/// use fsvisit::{DirectoryLister, Entry, VisitError};
///
/// /// Serves the same canned children for every directory level.
/// struct Canned(Vec<Entry>);
///
/// impl DirectoryLister for Canned {
///     fn list(&self, _dir: &Path) -> Result<Vec<Entry>, VisitError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait DirectoryLister {
    /// List the immediate children of `dir`, in visiting order.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, VisitError>;
}

/// The match predicate: decides structural eligibility of an entry,
/// independently of anything the observer hooks do.
///
/// A rejected file is skipped. A rejected directory is pruned together with
/// its entire subtree. Predicate and observer flags compose with AND: an
/// entry reaches the result only if the predicate accepts it *and* no hook
/// excluded it.
///
/// Plain closures work directly: any `Fn(&Entry) -> bool` is a `Matcher`.
///
/// # Example
///
/// ```rust
/// use fsvisit::{Entry, Matcher};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.extension.eq_ignore_ascii_case(&self.0)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry is eligible for the result.
    fn is_match(&self, entry: &Entry) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Entry) -> bool,
{
    fn is_match(&self, entry: &Entry) -> bool {
        self(entry)
    }
}
