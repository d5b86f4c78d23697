use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::entry::Entry;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Per-search state handed to the start and finish hooks.
///
/// A fresh `Session` is created for every
/// [`Visitor::search`](crate::Visitor::search) call and discarded when it
/// returns. Setting [`stop_search`](Session::stop_search) inside a start hook
/// terminates before the root directory is ever listed; setting it inside a
/// finish hook has no effect, the walk is already over.
#[derive(Debug)]
pub struct Session {
    /// Request cooperative termination of the whole search.
    pub stop_search: bool,

    started: Instant,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            stop_search: false,
            started: Instant::now(),
        }
    }

    /// Wall-clock time since the search started.
    ///
    /// A finish hook can read this to report elapsed time; an intermediate
    /// hook can combine it with [`Decision::stop_search`] to build a timeout.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Mutable per-visit flags for a single entry.
///
/// One `Decision` accompanies one entry through its found and filtered
/// stages and is discarded afterwards; flags never leak between entries.
/// Both flags start `false` and only hooks flip them.
#[derive(Debug)]
pub struct Decision {
    /// Full path of the entry under consideration.
    pub path: PathBuf,

    /// Drop this entry from the result. On a directory's found stage this
    /// prunes the whole subtree; on its filtered stage, only the directory's
    /// own entry (children already produced stay in the result).
    pub exclude: bool,

    /// Terminate the entire search at this exact point. Entries already
    /// produced stay in the result; nothing discovered later is yielded.
    pub stop_search: bool,
}

impl Decision {
    pub(crate) fn new(entry: &Entry) -> Self {
        Self {
            path: entry.path.clone(),
            exclude: false,
            stop_search: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Observer registry
// ---------------------------------------------------------------------------

pub(crate) type SessionHook = Box<dyn FnMut(&mut Session)>;
pub(crate) type DecisionHook = Box<dyn FnMut(&mut Decision)>;

/// Ordered callback lists, one per observation point.
///
/// Firing walks one list front to back, handing every hook exclusive access
/// to the same `Session` or `Decision`. Later hooks see mutations made by
/// earlier ones. A hook that panics unwinds straight out of the search.
#[derive(Default)]
pub(crate) struct Observers {
    pub search_started: Vec<SessionHook>,
    pub search_finished: Vec<SessionHook>,
    pub file_found: Vec<DecisionHook>,
    pub file_filtered: Vec<DecisionHook>,
    pub directory_found: Vec<DecisionHook>,
    pub directory_filtered: Vec<DecisionHook>,
}

pub(crate) fn fire_session(hooks: &mut [SessionHook], session: &mut Session) {
    for hook in hooks {
        hook(session);
    }
}

pub(crate) fn fire(hooks: &mut [DecisionHook], decision: &mut Decision) {
    for hook in hooks {
        hook(decision);
    }
}
