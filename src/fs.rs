//! Filesystem-backed directory listing.

use std::path::Path;

use ignore::WalkBuilder;

use crate::entry::{Entry, EntryKind};
use crate::error::VisitError;
use crate::traits::DirectoryLister;

/// The default [`DirectoryLister`]: lists real directories one level at a
/// time.
///
/// Children come back sorted by file name, so repeated runs observe the same
/// sibling order regardless of the platform's readdir order. Symbolic links
/// are never followed; anything that is neither a regular file nor a
/// directory is reported as [`EntryKind::Undefined`] and the engine skips it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, VisitError> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut entries = Vec::new();
        for item in builder.build() {
            let dent = item.map_err(|e| map_ignore_error(dir, e))?;
            // Depth 0 is `dir` itself, not a child.
            if dent.depth() == 0 {
                continue;
            }
            entries.push(classify(dent));
        }
        Ok(entries)
    }
}

/// Build an [`Entry`] from a walked item, classifying its kind.
fn classify(dent: ignore::DirEntry) -> Entry {
    match dent.file_type() {
        Some(ft) if ft.is_dir() => Entry::directory(dent.into_path()),
        Some(ft) if ft.is_file() => Entry::file(dent.into_path()),
        _ => Entry {
            name: dent.file_name().to_string_lossy().into_owned(),
            extension: String::new(),
            kind: EntryKind::Undefined,
            path: dent.into_path(),
        },
    }
}

/// Map a walk error onto the crate taxonomy, attributing it to the listed
/// directory when the error itself carries no path.
fn map_ignore_error(dir: &Path, err: ignore::Error) -> VisitError {
    match err {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => VisitError::from_io(path, io_err),
            other => VisitError::Lister(other.to_string()),
        },
        ignore::Error::Io(io_err) => VisitError::from_io(dir.to_path_buf(), io_err),
        other => VisitError::Lister(other.to_string()),
    }
}
