use std::path::{Path, PathBuf};

/// A single filesystem object reported by a
/// [`DirectoryLister`](crate::traits::DirectoryLister) during traversal.
///
/// Entries compare by value: two entries are equal exactly when `name`,
/// `path`, `extension`, and `kind` all agree. A lister constructs a fresh
/// `Entry` for every call; the engine owns it only for the duration of one
/// visit and hands surviving entries to the caller inside
/// [`Results`](crate::results::Results).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Base name of the entry, without any directory components.
    pub name: String,

    /// Full path to the entry. Unique identity within one traversal.
    pub path: PathBuf,

    /// File extension without the leading dot. Empty for directories.
    pub extension: String,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

impl Entry {
    /// Build a file entry, deriving `name` and `extension` from the path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: base_name(&path),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
            kind: EntryKind::File,
            path,
        }
    }

    /// Build a directory entry. Directories carry no extension.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: base_name(&path),
            extension: String::new(),
            kind: EntryKind::Directory,
            path,
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The kind of a reported entry.
///
/// A conforming lister classifies everything it returns as `File` or
/// `Directory`. `Undefined` is the defensive fallback for objects that fit
/// neither (sockets, device nodes, unresolvable symlinks); the engine never
/// descends into such entries and never yields them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory the engine may descend into.
    Directory,

    /// Anything the lister could not classify. Invisible to the walk.
    Undefined,
}
