use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};

use crate::entry::{Entry, EntryKind};
use crate::error::ScanError;
use crate::filter::PathFilter;
use crate::inspect::query_permission_status;
use crate::results::{Results, ScanStats};
use crate::traits::{Filesystem, ReportSink};

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters passed from the builder to the engine.
///
/// `pub(crate)`, not part of the public API. Callers configure these
/// via the builder methods (`.root()`, `.exclude()`, `.max_path_len()`, `.max_depth()`).
pub(crate) struct WalkConfig {
    pub root:      PathBuf,
    pub filter:    PathFilter,
    pub max_depth: Option<usize>,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config:         WalkConfig,
    pub collect_paths:  bool,
    pub collect_errors: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk `fs` from the configured root, reporting every match to `sink`.
///
/// Called by `ScanBuilder::run_on()` after validating inputs. Never fails:
/// every traversal error is recovered by skipping the affected directory or path.
pub(crate) fn run(fs: &dyn Filesystem, sink: &mut dyn ReportSink, opts: EngineOptions) -> Results {
    let start = Instant::now();

    let mut traverser = Traverser {
        fs,
        sink,
        config:         &opts.config,
        collect_paths:  opts.collect_paths,
        collect_errors: opts.collect_errors,
        matches:        0,
        files:          0,
        dirs:           0,
        skipped:        0,
        paths:          Vec::new(),
        errors:         Vec::new(),
    };
    traverser.scan(&opts.config.root, 0);

    let duration = start.elapsed();
    let stats = ScanStats::compute(traverser.files, traverser.dirs, traverser.skipped, duration);

    debug!(
        root = %opts.config.root.display(),
        matches = traverser.matches,
        dirs = stats.dirs,
        files = stats.files,
        skipped = stats.skipped,
        elapsed_ms = duration.as_millis() as u64,
        "scan complete"
    );

    Results {
        matches: traverser.matches,
        paths:   traverser.paths,
        stats,
        errors:  traverser.errors,
    }
}

// ---------------------------------------------------------------------------
// Traverser
// ---------------------------------------------------------------------------

/// Depth-first recursive walk.
///
/// Each `scan()` frame owns the listing of its directory; the handle is
/// dropped when the frame returns, whichever way it returns.
struct Traverser<'a> {
    fs:             &'a dyn Filesystem,
    sink:           &'a mut dyn ReportSink,
    config:         &'a WalkConfig,
    collect_paths:  bool,
    collect_errors: bool,
    matches:        usize,
    files:          usize,
    dirs:           usize,
    skipped:        usize,
    paths:          Vec<PathBuf>,
    errors:         Vec<ScanError>,
}

impl Traverser<'_> {
    /// Scan the directory at `dir`, which sits `depth` levels below the root.
    fn scan(&mut self, dir: &Path, depth: usize) {
        if let Some(max) = self.config.max_depth {
            if depth >= max {
                return;
            }
        }

        let fs = self.fs;
        let listing = match fs.read_dir(dir) {
            Ok(listing) => listing,
            Err(source) => {
                debug!(path = %dir.display(), error = %source, "skipping unreadable directory");
                self.skip(ScanError::DirectoryOpen {
                    path: dir.to_path_buf(),
                    source,
                });
                return;
            }
        };
        self.dirs += 1;

        for res in listing {
            match res {
                Ok(entry) => self.analyze_entry(dir, entry, depth),
                Err(e) => {
                    // Same as readdir() returning NULL: the listing is over.
                    debug!(path = %dir.display(), error = %e, "directory listing ended early");
                    break;
                }
            }
        }
    }

    /// Recurse into a directory entry, or check a non-directory one.
    fn analyze_entry(&mut self, dir: &Path, entry: Entry, depth: usize) {
        let config = self.config;
        let filter = &config.filter;

        if entry.kind == EntryKind::Dir {
            if PathFilter::is_skippable_directory_name(&entry.name) {
                return;
            }
            let path = match filter.child_path(dir, &entry.name) {
                Ok(p) => p,
                Err(e) => return self.skip_overlong(e),
            };
            if filter.is_excluded_path(&path) {
                debug!(path = %path.display(), "skipping excluded directory");
                return;
            }
            self.scan(&path, depth + 1);
            return;
        }

        let path = match filter.child_path(dir, &entry.name) {
            Ok(p) => p,
            Err(e) => return self.skip_overlong(e),
        };

        self.files += 1;
        match query_permission_status(self.fs, &path) {
            Ok(status) if status.is_match() => self.report(path),
            Ok(_) => {}
            Err(e) => {
                debug!(path = %path.display(), error = ?e, "skipping path with unreadable metadata");
                self.skip(e);
            }
        }
    }

    /// Hand a match to the sink. Only delivered matches are counted and collected.
    fn report(&mut self, path: PathBuf) {
        // Root-relative: "/usr/bin/passwd" under "/" is reported as "usr/bin/passwd".
        let relative = path.strip_prefix(&self.config.root).unwrap_or(&path);
        if let Err(source) = self.sink.report(relative) {
            warn!(path = %path.display(), error = %source, "failed to report match");
            self.skip(ScanError::Report { path, source });
            return;
        }

        self.matches += 1;
        if self.collect_paths {
            self.paths.push(path);
        }
    }

    fn skip_overlong(&mut self, err: ScanError) {
        warn!("{err}, skipping");
        self.skip(err);
    }

    fn skip(&mut self, err: ScanError) {
        self.skipped += 1;
        if self.collect_errors {
            self.errors.push(err);
        }
    }
}
