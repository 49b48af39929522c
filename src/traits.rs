use std::io;
use std::path::Path;

use crate::entry::Entry;

/// A directory listing. Owns the underlying directory handle, which is
/// released when the listing is dropped.
pub type Listing<'a> = Box<dyn Iterator<Item = io::Result<Entry>> + 'a>;

/// The filesystem the traverser walks.
///
/// Two capabilities are needed: listing a directory (names plus type tags) and
/// resolving a path to its mode bits. [`OsFilesystem`](crate::OsFilesystem)
/// backs both with `std::fs`; tests substitute in-memory trees to produce
/// conditions a real filesystem won't, such as listings that contain `.` and
/// `..`, or denied directories while running as root.
///
/// # Error Handling
///
/// Only the success/failure contract matters. Every `Err` is turned into a
/// recoverable [`ScanError`](crate::ScanError) by the traverser and the
/// offending directory or path is skipped.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::{Path, PathBuf};
/// use suid_locate::{Entry, EntryKind, Filesystem, Listing};
///
/// /// A filesystem with a single setuid binary in its root.
/// struct OneBinary;
///
/// impl Filesystem for OneBinary {
///     fn read_dir(&self, path: &Path) -> io::Result<Listing<'_>> {
///         if path == Path::new("/") {
///             Ok(Box::new(std::iter::once(Ok(Entry::new("su", EntryKind::File)))))
///         } else {
///             Err(io::ErrorKind::NotFound.into())
///         }
///     }
///
///     fn mode(&self, _path: &Path) -> io::Result<u32> {
///         Ok(0o104755)
///     }
/// }
///
/// let mut found: Vec<PathBuf> = Vec::new();
/// let results = suid_locate::scan().run_on(&OneBinary, &mut found).unwrap();
/// assert_eq!(results.matches, 1);
/// assert_eq!(found, vec![PathBuf::from("su")]);
/// ```
pub trait Filesystem {
    /// Open `path` as a directory and list its entries in whatever order the
    /// underlying primitive yields them.
    fn read_dir(&self, path: &Path) -> io::Result<Listing<'_>>;

    /// Raw `st_mode` of `path`, following symbolic links.
    fn mode(&self, path: &Path) -> io::Result<u32>;
}

/// Receives matched paths, one call per match, in discovery order.
///
/// Paths arrive root-relative: the scan root is stripped, so a scan of `/`
/// reports `/usr/bin/passwd` as `usr/bin/passwd`.
pub trait ReportSink {
    fn report(&mut self, path: &Path) -> io::Result<()>;
}
