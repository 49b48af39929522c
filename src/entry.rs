use std::ffi::OsString;

/// A single item produced by listing a directory through a
/// [`Filesystem`](crate::traits::Filesystem).
///
/// Carries only what the listing itself knows. The full path is built by the
/// traverser from the listed directory and `name`, after the name has passed
/// the skip checks.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The entry's leaf name as listed by the directory.
    pub name: OsString,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

/// The type tag of a listed entry.
///
/// Only [`EntryKind::Dir`] is recursed into. Every other kind, `Symlink`
/// included, takes the permission-check branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link. Never followed for recursion.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,

    /// The listing could not tell what this entry is.
    Unknown,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

impl EntryKind {
    /// Map a `std::fs::FileType` to an entry kind.
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}
