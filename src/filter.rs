use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Prefix of the virtual process filesystem. Excluded unless the caller opts
/// out of the default exclusions.
pub const PROC_PREFIX: &str = "/proc";

/// Longest path, in bytes, the scanner will operate on by default (Linux `PATH_MAX`).
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Decides which paths and names are skipped before any I/O is done on them.
///
/// Exclusion is a literal byte-prefix test, not a mount-point check: `/proc`
/// also excludes `/processes`, and a procfs mounted anywhere else is walked.
#[derive(Debug, Clone)]
pub struct PathFilter {
    excluded:     Vec<OsString>,
    max_path_len: usize,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(vec![OsString::from(PROC_PREFIX)], DEFAULT_MAX_PATH_LEN)
    }
}

impl PathFilter {
    pub fn new(excluded: Vec<OsString>, max_path_len: usize) -> Self {
        Self { excluded, max_path_len }
    }

    /// The configured excluded prefixes.
    pub fn excluded(&self) -> &[OsString] {
        &self.excluded
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    /// `true` if `path` is empty or starts, byte for byte, with an excluded prefix.
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        let bytes = path.as_os_str().as_encoded_bytes();
        if bytes.is_empty() {
            return true;
        }
        self.excluded
            .iter()
            .any(|prefix| bytes.starts_with(prefix.as_encoded_bytes()))
    }

    /// `true` for the self (`.`) and parent (`..`) references and for an
    /// empty name. Recursing into either reference never terminates.
    pub fn is_skippable_directory_name(name: &OsStr) -> bool {
        name.is_empty() || name == "." || name == ".."
    }

    /// Reject `path` if it is longer than the configured maximum.
    pub fn check_length(&self, path: &Path) -> Result<(), ScanError> {
        let len = path.as_os_str().len();
        if len > self.max_path_len {
            return Err(ScanError::PathTooLong {
                path: path.to_path_buf(),
                len,
                max: self.max_path_len,
            });
        }
        Ok(())
    }

    /// Join `parent` and `name` with a single separator, checking the result's length.
    pub fn child_path(&self, parent: &Path, name: &OsStr) -> Result<PathBuf, ScanError> {
        let path = parent.join(name);
        self.check_length(&path)?;
        Ok(path)
    }
}
