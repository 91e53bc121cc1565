//! Transient files for the file-write benchmarks.
//!
//! A [`ScratchFile`] is removed when it goes out of scope, whether the
//! benchmark body finished or bailed out halfway through its loop.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

const TRACE_TARGET: &str = "wireperf::scratch";

/// Uniquely named file (`<stem>.<random>.test`) owned by one benchmark run.
#[derive(Debug)]
pub struct ScratchFile {
    inner: NamedTempFile,
}

impl ScratchFile {
    pub fn create_in(dir: impl AsRef<Path>, stem: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let prefix = format!("{stem}.");
        let inner = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".test")
            .tempfile_in(dir)
            .with_context(|| format!("create scratch file {} in {}", stem, dir.display()))?;
        debug!(
            target: TRACE_TARGET,
            path = %inner.path().display(),
            "scratch file created"
        );
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn file_mut(&mut self) -> &mut File {
        self.inner.as_file_mut()
    }

    pub fn read_contents(&self) -> Result<Vec<u8>> {
        fs::read(self.path()).with_context(|| format!("read scratch file {}", self.path().display()))
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        // `NamedTempFile` unlinks the path once this returns.
        debug!(
            target: TRACE_TARGET,
            path = %self.inner.path().display(),
            "scratch file released"
        );
    }
}
