use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::entry::{Entry, EntryKind};
use crate::traits::{Filesystem, Listing};

/// The real filesystem, through `std::fs`.
///
/// Entry types come from the directory listing itself (`d_type`), with the
/// standard library falling back to `lstat` when the listing can't tell. If
/// even that fails the entry is [`EntryKind::Unknown`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn read_dir(&self, path: &Path) -> io::Result<Listing<'_>> {
        let dir = std::fs::read_dir(path)?;
        Ok(Box::new(dir.map(|res| {
            res.map(|de| {
                let kind = de
                    .file_type()
                    .map(EntryKind::from_file_type)
                    .unwrap_or(EntryKind::Unknown);
                Entry::new(de.file_name(), kind)
            })
        })))
    }

    fn mode(&self, path: &Path) -> io::Result<u32> {
        Ok(std::fs::metadata(path)?.permissions().mode())
    }
}
