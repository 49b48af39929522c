//! # suid-locate
//!
//! Find files with the SUID or SGID bit on.
//!
//! Setuid/setgid executables run with the privileges of their owner or group
//! rather than the invoking user. They are handy when used properly and a
//! local privilege-escalation risk when not, so an audit starts by listing
//! them.
//!
//! suid-locate walks a directory tree depth-first and checks every
//! non-directory entry. A path is reported when it has the setuid bit together
//! with owner-execute, or the setgid bit together with group-execute. The walk:
//!
//! - never follows symbolic links into directories (the permission check on a
//!   link does follow it),
//! - skips `/proc` and any other configured byte prefix,
//! - skips, without aborting, every directory or path it cannot read,
//! - rejects paths longer than the configured limit instead of truncating them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use suid_locate::LineSink;
//!
//! let mut sink = LineSink::new(std::io::stdout());
//! let results = suid_locate::scan().run(&mut sink).unwrap();
//!
//! eprintln!("{} matches in {:.3}s", results.matches, results.stats.duration.as_secs_f64());
//! ```
//!
//! Matches reach the [`ReportSink`] root-relative and in discovery order; a
//! scan of `/` reports `/usr/bin/passwd` as `usr/bin/passwd`.
//!
//! # Custom Filesystems
//!
//! The traverser only needs to list directories and read mode bits. Implement
//! [`Filesystem`] to scan something other than the local disk; see its docs
//! for an example.

#![forbid(unsafe_code)]

#[cfg(not(unix))]
compile_error!("suid-locate inspects Unix permission bits and only builds on Unix targets");

mod builder;
mod engine;
mod entry;
mod error;
mod filter;
mod fs;
mod inspect;
mod report;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ScanBuilder;
pub use entry::{Entry, EntryKind};
pub use error::ScanError;
pub use filter::{PathFilter, DEFAULT_MAX_PATH_LEN, PROC_PREFIX};
pub use fs::OsFilesystem;
pub use inspect::{query_permission_status, PermissionStatus};
pub use report::LineSink;
pub use results::{Results, ScanStats};
pub use traits::{Filesystem, Listing, ReportSink};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ScanBuilder`] to configure and run a scan.
///
/// # Example
///
/// ```rust
/// use std::fs;
/// use std::os::unix::fs::PermissionsExt;
/// use std::path::PathBuf;
///
/// let dir = tempfile::tempdir().unwrap();
/// let bin = dir.path().join("helper");
/// fs::write(&bin, "").unwrap();
/// fs::set_permissions(&bin, fs::Permissions::from_mode(0o4755)).unwrap();
///
/// let mut found: Vec<PathBuf> = Vec::new();
/// let results = suid_locate::scan()
///     .root(dir.path())
///     .run(&mut found)
///     .unwrap();
///
/// assert_eq!(results.matches, 1);
/// assert_eq!(found, vec![PathBuf::from("helper")]);
/// ```
pub fn scan() -> ScanBuilder {
    ScanBuilder::default()
}
