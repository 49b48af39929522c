use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::traits::ReportSink;

/// Writes one `[+] <path>` line per match.
///
/// The path goes out as its raw bytes. A name that isn't valid UTF-8 is
/// printed exactly as it exists on disk, never lossily re-encoded.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for LineSink<W> {
    fn report(&mut self, path: &Path) -> io::Result<()> {
        self.out.write_all(b"[+] ")?;
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b"\n")
    }
}

/// Collects reported paths in discovery order.
impl ReportSink for Vec<PathBuf> {
    fn report(&mut self, path: &Path) -> io::Result<()> {
        self.push(path.to_path_buf());
        Ok(())
    }
}
