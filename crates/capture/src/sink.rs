// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide report stream with scoped redirection.

use crate::transcript::Transcript;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Target = Box<dyn Write + Send>;

/// Shared handle to the stream that test reports are written to.
///
/// Clones share one target. The target can only be swapped through
/// [`OutputSink::redirect`], which hands back a guard that puts the
/// previous target back when dropped.
#[derive(Clone)]
pub struct OutputSink {
    target: Arc<Mutex<Target>>,
    /// Number of live redirects
    depth: Arc<AtomicUsize>,
}

impl OutputSink {
    /// Sink writing to the process's stdout.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Sink writing to an arbitrary writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
            depth: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Write one line to the current target.
    pub fn write_line(&self, line: impl fmt::Display) -> io::Result<()> {
        let mut target = self.target.lock();
        writeln!(target, "{}", line)
    }

    /// Flush the current target.
    pub fn flush(&self) -> io::Result<()> {
        self.target.lock().flush()
    }

    /// Send all output to `writer` until the returned guard is dropped.
    ///
    /// Guards must be released in reverse order of acquisition; debug
    /// builds assert this.
    #[must_use = "output is restored as soon as the guard is dropped"]
    pub fn redirect<W: Write + Send + 'static>(&self, writer: W) -> RedirectGuard {
        let writer: Target = Box::new(writer);
        let mut target = self.target.lock();
        let previous = std::mem::replace(&mut *target, writer);
        let level = self.depth.fetch_add(1, Ordering::SeqCst) + 1;
        drop(target);
        RedirectGuard {
            sink: self.clone(),
            previous: Some(previous),
            level,
        }
    }

    /// Create (or truncate) a transcript at `path` and redirect into it.
    #[must_use = "output is restored as soon as the guard is dropped"]
    pub fn redirect_to_file(&self, path: &Path) -> io::Result<RedirectGuard> {
        let transcript = Transcript::create(path)?;
        Ok(self.redirect(transcript))
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink").finish_non_exhaustive()
    }
}

/// Restores an [`OutputSink`]'s previous target when dropped.
pub struct RedirectGuard {
    sink: OutputSink,
    previous: Option<Target>,
    /// Redirect depth this guard created
    level: usize,
}

impl RedirectGuard {
    /// Restore the previous target now, reporting any error flushing the
    /// redirected one.
    pub fn restore(mut self) -> io::Result<()> {
        self.swap_back()
    }

    fn swap_back(&mut self) -> io::Result<()> {
        let Some(previous) = self.previous.take() else {
            return Ok(());
        };
        let mut target = self.sink.target.lock();
        let depth = self.sink.depth.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(
            depth == self.level || std::thread::panicking(),
            "redirect guard released out of order (depth {}, guard {})",
            depth,
            self.level
        );
        let mut redirected = std::mem::replace(&mut *target, previous);
        drop(target);
        redirected.flush()
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        let _ = self.swap_back();
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
