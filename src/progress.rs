// src/progress.rs
use std::io::Write;

/// Lightweight progress reporting for catalog builds.
/// Frontends implement this to surface status to users; the builders call it
/// and never print themselves.
pub trait Progress {
    /// Called at the start with the number of sources (pages, or schema + pages).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A source could not be read; the build continues without it.
    fn source_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called when one source has been processed.
    fn item_done(&mut self, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stderr, so stdout stays clean for piping.
pub struct ConsoleProgress<W: Write = std::io::Stderr> {
    out: W,
    total: usize,
    done: usize,
    failed: usize,
}

impl ConsoleProgress {
    pub fn stderr() -> Self { Self::new(std::io::stderr()) }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, total: 0, done: 0, failed: 0 }
    }

    pub fn into_inner(self) -> W { self.out }

    fn line(&mut self, msg: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{msg}");
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.line(format_args!("Reading {total} source(s)..."));
    }

    fn log(&mut self, msg: &str) {
        self.line(format_args!("{msg}"));
    }

    fn source_failed(&mut self, url: &str, reason: &str) {
        self.failed += 1;
        self.line(format_args!("  skipped {url}: {reason}"));
    }

    fn item_done(&mut self, url: &str) {
        self.done += 1;
        let (done, total) = (self.done, self.total);
        self.line(format_args!("  [{done}/{total}] {url}"));
    }

    fn finish(&mut self) {
        let (done, failed) = (self.done, self.failed);
        self.line(format_args!("Done: {done} read, {failed} skipped."));
    }
}
