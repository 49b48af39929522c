use std::ffi::OsString;
use std::path::PathBuf;

use crate::engine::{run, EngineOptions, WalkConfig};
use crate::error::ScanError;
use crate::filter::{PathFilter, DEFAULT_MAX_PATH_LEN, PROC_PREFIX};
use crate::fs::OsFilesystem;
use crate::results::Results;
use crate::traits::{Filesystem, ReportSink};

// ---------------------------------------------------------------------------
// ScanBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a scan.
///
/// Created via [`suid_locate::scan()`](crate::scan). Configure with chained
/// builder methods, then call [`run()`](ScanBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// use suid_locate::LineSink;
///
/// let mut sink = LineSink::new(std::io::stdout());
/// let results = suid_locate::scan()
///     .root("/usr")
///     .collect_errors(true)
///     .run(&mut sink)?;
///
/// eprintln!("{} matches, {} paths skipped", results.matches, results.errors.len());
/// # Ok::<(), suid_locate::ScanError>(())
/// ```
pub struct ScanBuilder {
    root:             PathBuf,
    excludes:         Vec<OsString>,
    default_excludes: bool,
    max_path_len:     usize,
    max_depth:        Option<usize>,
    collect_paths:    bool,
    collect_errors:   bool,
}

impl Default for ScanBuilder {
    fn default() -> Self {
        Self {
            root:             PathBuf::from("/"),
            excludes:         Vec::new(),
            default_excludes: true,
            max_path_len:     DEFAULT_MAX_PATH_LEN,
            max_depth:        None,
            collect_paths:    false,
            collect_errors:   false,
        }
    }
}

impl ScanBuilder {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory to start from. Defaults to `/`.
    ///
    /// Reported paths are relative to this directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    // ── Exclusions ────────────────────────────────────────────────────────

    /// Never enter directories whose full path starts with `prefix`.
    ///
    /// The test is a literal byte prefix: `/mnt/a` also excludes `/mnt/ab`.
    pub fn exclude(mut self, prefix: impl Into<OsString>) -> Self {
        self.excludes.push(prefix.into());
        self
    }

    /// Drop the built-in `/proc` exclusion.
    pub fn no_default_excludes(mut self) -> Self {
        self.default_excludes = false;
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Longest path, in bytes, that is operated on. Longer paths are skipped
    /// and recorded as [`ScanError::PathTooLong`], never truncated.
    pub fn max_path_len(mut self, n: usize) -> Self {
        self.max_path_len = n;
        self
    }

    /// Maximum traversal depth. `0` means nothing below the root is looked
    /// at, `1` means the root's own entries, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    /// Collect full matched paths into [`Results::paths`].
    pub fn collect_paths(mut self, yes: bool) -> Self {
        self.collect_paths = yes;
        self
    }

    /// Collect skipped-path errors into [`Results::errors`].
    ///
    /// Disabled by default. Errors are always skipped silently as far as the
    /// scan is concerned; this only keeps them around for the caller.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.collect_errors = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Scan the real filesystem, reporting each match to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for invalid configuration (empty or overlong root,
    /// zero path length limit). Errors during traversal are recovered and,
    /// with `.collect_errors(true)`, returned in [`Results::errors`].
    pub fn run(self, sink: &mut dyn ReportSink) -> Result<Results, ScanError> {
        self.run_on(&OsFilesystem, sink)
    }

    /// Scan `fs` instead of the real filesystem.
    pub fn run_on(self, fs: &dyn Filesystem, sink: &mut dyn ReportSink) -> Result<Results, ScanError> {
        if self.max_path_len == 0 {
            return Err(ScanError::InvalidMaxPathLen(self.max_path_len));
        }
        if self.root.as_os_str().is_empty() || self.root.as_os_str().len() > self.max_path_len {
            return Err(ScanError::InvalidRoot(self.root));
        }

        let mut excluded = Vec::with_capacity(self.excludes.len() + 1);
        if self.default_excludes {
            excluded.push(OsString::from(PROC_PREFIX));
        }
        excluded.extend(self.excludes);

        let opts = EngineOptions {
            config: WalkConfig {
                root:      self.root,
                filter:    PathFilter::new(excluded, self.max_path_len),
                max_depth: self.max_depth,
            },
            collect_paths:  self.collect_paths,
            collect_errors: self.collect_errors,
        };

        Ok(run(fs, sink, opts))
    }
}
