use std::path::Path;

use crate::error::ScanError;
use crate::traits::Filesystem;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_IXUSR: u32 = 0o0100;
const S_IXGRP: u32 = 0o0010;

/// Privileged-bit status of a single path.
///
/// A set-id bit only counts together with the execute bit of the same class:
/// setuid needs owner-execute, setgid needs group-execute. A setuid bit on a
/// file nobody can execute as its owner is not an escalation vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionStatus {
    pub set_uid_exec: bool,
    pub set_gid_exec: bool,
}

impl PermissionStatus {
    pub fn from_mode(mode: u32) -> Self {
        Self {
            set_uid_exec: mode & S_ISUID != 0 && mode & S_IXUSR != 0,
            set_gid_exec: mode & S_ISGID != 0 && mode & S_IXGRP != 0,
        }
    }

    /// Whether this path should be reported.
    pub fn is_match(&self) -> bool {
        self.set_uid_exec || self.set_gid_exec
    }
}

/// Query the permission status of `path`, following symbolic links.
pub fn query_permission_status(
    fs: &dyn Filesystem,
    path: &Path,
) -> Result<PermissionStatus, ScanError> {
    fs.mode(path)
        .map(PermissionStatus::from_mode)
        .map_err(|source| ScanError::MetadataQuery {
            path: path.to_path_buf(),
            source,
        })
}
