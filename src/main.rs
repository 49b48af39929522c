//! suid-locate - list SUID/SGID files on this system
//!
//! Scans from `/` with the default exclusions. Takes no arguments and always
//! exits successfully; diagnostics go to stderr, filtered by `RUST_LOG`.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use suid_locate::LineSink;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const SCAN_ROOT: &str = "/";

fn main() -> ExitCode {
    setup_logging();

    if let Err(e) = run() {
        error!("{:#}", e);
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "[*] suid-locate v{}", env!("CARGO_PKG_VERSION")).context("Failed to write banner")?;
    writeln!(out, "[*] Searching for SUID/SGID files in your system...").context("Failed to write banner")?;

    let mut sink = LineSink::new(out);
    let results = suid_locate::scan()
        .root(SCAN_ROOT)
        .run(&mut sink)
        .context("Invalid scan configuration")?;

    debug!(
        matches = results.matches,
        dirs = results.stats.dirs,
        files = results.stats.files,
        skipped = results.stats.skipped,
        entries_per_sec = results.stats.entries_per_sec,
        "finished"
    );

    let mut out = sink.into_inner();
    writeln!(out, "[*] DONE").context("Failed to write completion line")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
