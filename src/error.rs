use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    // Traversal
    #[error("cannot open directory {}", path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot query metadata for {}", path.display())]
    MetadataQuery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path {} is {len} bytes, over the {max} byte limit", path.display())]
    PathTooLong {
        path: PathBuf,
        len:  usize,
        max:  usize,
    },

    // Output
    #[error("failed to report {}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config
    #[error("invalid scan root")]
    InvalidRoot(PathBuf),

    #[error("invalid maximum path length")]
    InvalidMaxPathLen(usize),
}

impl ScanError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DirectoryOpen { path, .. }
            | Self::MetadataQuery { path, .. }
            | Self::PathTooLong { path, .. }
            | Self::Report { path, .. }
            | Self::InvalidRoot(path) => Some(path),
            Self::InvalidMaxPathLen(_) => None,
        }
    }

    /// Whether the scan can continue after this error.
    ///
    /// Everything that happens during traversal is recoverable: the offending
    /// subtree or path is skipped and the walk keeps going. Only configuration
    /// errors, which are raised before the first directory is opened, are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidRoot(_) | Self::InvalidMaxPathLen(_))
    }
}
