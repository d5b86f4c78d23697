use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure raised while traversing.
///
/// Every variant is fatal to the in-progress search: the error propagates
/// out of [`Visitor::search`](crate::Visitor::search) and no partial result
/// is returned. The crate does not retry and does not translate lister
/// errors beyond the classification below.
#[derive(Error, Debug)]
pub enum VisitError {
    /// The root or a subdirectory no longer exists.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The process is not allowed to read the directory.
    #[error("access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    /// Any other listing failure, with the underlying I/O error attached.
    #[error("failed to list {}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Raised by a custom lister for failures outside the I/O taxonomy.
    #[error("lister error: {0}")]
    Lister(String),
}

impl VisitError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to report the offending directory without pattern
    /// matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p) | Self::AccessDenied(p) | Self::Listing { path: p, .. } => Some(p),
            Self::Lister(_) => None,
        }
    }

    /// Classify an I/O error reported for `path` into the listing taxonomy.
    ///
    /// Custom [`DirectoryLister`](crate::traits::DirectoryLister)
    /// implementations should route their raw `io::Error`s through here so
    /// every lister reports the same variants.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path),
            _ => Self::Listing { path, source },
        }
    }
}
