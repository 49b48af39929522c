use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanError;

/// The output of a completed scan.
///
/// `paths` and `errors` are both opt-in, disabled by default. Matches are
/// always streamed to the [`ReportSink`](crate::ReportSink); enable these on
/// the builder when the caller also wants them afterwards:
/// `.collect_paths(true)` and `.collect_errors(true)`.
#[derive(Debug)]
pub struct Results {
    /// Number of matches the sink accepted. A match whose report failed is
    /// recorded as [`ScanError::Report`] instead.
    pub matches: usize,

    /// Full (not root-relative) paths of reported matches, in discovery order.
    /// Only populated if `.collect_paths(true)` was set on the builder.
    pub paths: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Paths skipped because of errors (unreadable directories, failed
    /// metadata queries, overlong paths, failed reports).
    /// Only populated if `.collect_errors(true)` was set on the builder.
    pub errors: Vec<ScanError>,
}

/// Statistics for a completed scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanStats {
    /// Non-directory entries whose permissions were checked.
    pub files: usize,

    /// Directories successfully opened and listed, the root included.
    pub dirs: usize,

    /// Entries skipped because of an error, whether or not they were collected.
    pub skipped: usize,

    /// Wall-clock time from scan start to completion.
    pub duration: Duration,

    /// Entries scanned per second. Equals `(files + dirs) / duration`,
    /// clamped to 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(files: usize, dirs: usize, skipped: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            skipped,
            duration,
            entries_per_sec: eps,
        }
    }
}
