//! # fsvisit
//!
//! Observable directory-tree traversal, embeddable and cancellable.
//!
//! fsvisit owns the traversal engine: the depth-first walk, the ordered
//! observation points it fires at every entry, and the stop/exclude
//! semantics those hooks control. It does **not** own presentation, argument
//! parsing, or policy for handling failures; those belong to the caller.
//! Even filesystem access sits behind a seam: the engine asks a
//! [`DirectoryLister`] for the children of each directory it enters, and the
//! bundled [`FsLister`] is just the default implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use std::path::Path;
//!
//! use fsvisit::{DirectoryLister, Entry, EntryKind, VisitError};
//!
//! // A two-level in-memory tree for demonstration
//! struct DemoTree;
//!
//! impl DirectoryLister for DemoTree {
//!     fn list(&self, dir: &Path) -> Result<Vec<Entry>, VisitError> {
//!         if dir == Path::new("root") {
//!             Ok(vec![
//!                 Entry::file("root/invoice_jan.txt"),
//!                 Entry::file("root/report.txt"),
//!                 Entry::directory("root/archive"),
//!             ])
//!         } else {
//!             Ok(vec![Entry::file("root/archive/invoice_feb.txt")])
//!         }
//!     }
//! }
//!
//! let results = fsvisit::visit("root")
//!     .lister(DemoTree)
//!     .with_matcher(|e: &Entry| e.kind == EntryKind::Directory || e.name.contains("invoice"))
//!     .run()
//!     .unwrap();
//!
//! // Descendants come before the directory that contains them.
//! let names: Vec<&str> = results.entries.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["invoice_jan.txt", "invoice_feb.txt", "archive"]);
//! ```
//!
//! To walk a real directory, drop the `.lister(..)` call; the builder wires
//! in [`FsLister`] by default.
//!
//! # Observation points
//!
//! Six hooks observe a search: `search_started`, `file_found`,
//! `file_filtered`, `directory_found`, `directory_filtered`, and
//! `search_finished`. Entry-level hooks receive a mutable [`Decision`] whose
//! two flags steer the walk: `exclude` drops the current entry (for a
//! directory's found stage, the whole subtree), `stop_search` terminates the
//! entire search on the spot.
//!
//! ```rust
//! use std::path::Path;
//!
//! use fsvisit::{DirectoryLister, Entry, VisitError};
//!
//! struct Flat;
//!
//! impl DirectoryLister for Flat {
//!     fn list(&self, _dir: &Path) -> Result<Vec<Entry>, VisitError> {
//!         Ok(vec![
//!             Entry::file("root/a.log"),
//!             Entry::file("root/b.tmp"),
//!             Entry::file("root/c.log"),
//!         ])
//!     }
//! }
//!
//! let results = fsvisit::visit("root")
//!     .lister(Flat)
//!     .on_file_found(|decision| {
//!         if decision.path.extension().is_some_and(|ext| ext == "tmp") {
//!             decision.exclude = true;
//!         }
//!     })
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.entries.len(), 2);
//! ```
//!
//! # Failure contract
//!
//! A directory that cannot be listed aborts the whole search: `run()`
//! returns a [`VisitError`] naming the offending path and nothing collected
//! before the failure survives. A hook that panics unwinds out of the search
//! the same way. Skip-and-continue policies belong to the embedding
//! application, typically as a custom [`DirectoryLister`] that swallows what
//! it considers non-fatal.

#![forbid(unsafe_code)]

pub mod fs;

mod builder;
mod engine;
mod entry;
mod error;
mod events;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::VisitBuilder;
pub use engine::Visitor;
pub use entry::{Entry, EntryKind};
pub use error::VisitError;
pub use events::{Decision, Session};
pub use fs::FsLister;
pub use results::{Results, ScanStats};
pub use traits::{DirectoryLister, Matcher};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`VisitBuilder`] rooted at `root`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
///
/// use fsvisit::{DirectoryLister, Entry, VisitError};
///
/// struct Leaf;
///
/// impl DirectoryLister for Leaf {
///     fn list(&self, _dir: &Path) -> Result<Vec<Entry>, VisitError> {
///         Ok(vec![Entry::file("root/note.txt")])
///     }
/// }
///
/// let results = fsvisit::visit("root").lister(Leaf).run().unwrap();
///
/// assert_eq!(results.entries.len(), 1);
/// assert_eq!(results.stats.files, 1);
/// ```
pub fn visit(root: impl Into<std::path::PathBuf>) -> VisitBuilder {
    VisitBuilder::new(root.into())
}
