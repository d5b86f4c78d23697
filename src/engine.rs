use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::entry::{Entry, EntryKind};
use crate::error::VisitError;
use crate::events::{fire, fire_session, Decision, Observers, Session};
use crate::results::{Results, ScanStats};
use crate::traits::{DirectoryLister, Matcher};

// ---------------------------------------------------------------------------
// Visitor
// ---------------------------------------------------------------------------

/// The traversal engine.
///
/// Built by [`VisitBuilder::build`](crate::VisitBuilder::build). A `Visitor`
/// holds no search-scoped state between calls: [`search`](Visitor::search)
/// may be invoked any number of times and every run is independent.
///
/// The walk is a plain synchronous depth-first recursion on the caller's
/// thread. Hooks fire as direct blocking calls in registration order; a
/// hook that panics unwinds out of `search` immediately.
pub struct Visitor {
    pub(crate) root: PathBuf,
    pub(crate) lister: Box<dyn DirectoryLister>,
    pub(crate) matcher: Box<dyn Matcher>,
    pub(crate) observers: Observers,
}

/// Signal propagated up the recursion once a hook requests termination.
/// Every pending parent frame unwinds without touching its remaining
/// siblings or firing its own filtered stage.
enum Flow {
    Continue,
    Stop,
}

/// Accumulated output of one walk: surviving entries in traversal order,
/// plus running counts of everything that reached its found stage.
struct WalkState {
    entries: Vec<Entry>,
    files_seen: usize,
    dirs_seen: usize,
}

impl Visitor {
    /// Run one full traversal from the configured root.
    ///
    /// Files are reported once; directories twice, once when discovered and
    /// once after their subtree completes. Within a directory, siblings keep
    /// the lister's order, and every descendant of a directory lands in the
    /// result ahead of the directory's own entry.
    ///
    /// # Errors
    ///
    /// Any directory that cannot be listed aborts the whole search with the
    /// lister's [`VisitError`]; entries collected before the failure are
    /// discarded.
    pub fn search(&mut self) -> Result<Results, VisitError> {
        let mut session = Session::new();
        debug!("search started at {}", self.root.display());

        fire_session(&mut self.observers.search_started, &mut session);
        if session.stop_search {
            // Terminated before the root was ever listed.
            fire_session(&mut self.observers.search_finished, &mut session);
            return Ok(Results {
                entries: Vec::new(),
                stats: ScanStats::compute(0, 0, session.elapsed()),
            });
        }

        let mut state = WalkState {
            entries: Vec::new(),
            files_seen: 0,
            dirs_seen: 0,
        };
        let root = self.root.clone();
        self.walk(&root, &mut state)?;

        fire_session(&mut self.observers.search_finished, &mut session);
        let duration = session.elapsed();
        debug!(
            "search finished: {} entries in {:.3}s",
            state.entries.len(),
            duration.as_secs_f64()
        );

        Ok(Results {
            entries: state.entries,
            stats: ScanStats::compute(state.files_seen, state.dirs_seen, duration),
        })
    }

    /// Visit one directory level, recursing into accepted subdirectories.
    fn walk(&mut self, dir: &Path, state: &mut WalkState) -> Result<Flow, VisitError> {
        trace!("listing {}", dir.display());
        for entry in self.lister.list(dir)? {
            match entry.kind {
                EntryKind::File => {
                    state.files_seen += 1;
                    let mut decision = Decision::new(&entry);
                    fire(&mut self.observers.file_found, &mut decision);
                    if decision.stop_search {
                        return Ok(Flow::Stop);
                    }
                    if !self.matcher.is_match(&entry) || decision.exclude {
                        continue;
                    }

                    fire(&mut self.observers.file_filtered, &mut decision);
                    if decision.stop_search {
                        return Ok(Flow::Stop);
                    }
                    if decision.exclude {
                        continue;
                    }
                    state.entries.push(entry);
                }
                EntryKind::Directory => {
                    state.dirs_seen += 1;
                    let mut decision = Decision::new(&entry);
                    fire(&mut self.observers.directory_found, &mut decision);
                    if decision.stop_search {
                        return Ok(Flow::Stop);
                    }
                    // Rejecting a directory prunes its entire subtree.
                    if !self.matcher.is_match(&entry) || decision.exclude {
                        continue;
                    }

                    // Children first: descendants land in the result ahead
                    // of the directory's own entry.
                    if let Flow::Stop = self.walk(&entry.path, state)? {
                        return Ok(Flow::Stop);
                    }

                    // A stop inside the subtree means this never fires.
                    fire(&mut self.observers.directory_filtered, &mut decision);
                    if decision.stop_search {
                        return Ok(Flow::Stop);
                    }
                    if decision.exclude {
                        // Children already collected stay in the result.
                        continue;
                    }
                    state.entries.push(entry);
                }
                // Listers are expected to classify everything they return;
                // anything they could not is invisible to the walk.
                EntryKind::Undefined => {}
            }
        }
        Ok(Flow::Continue)
    }
}
