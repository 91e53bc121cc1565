//! Micro-benchmarks for the low-level trade-offs behind a database driver:
//! buffer reuse, buffered I/O, text vs. binary decoding and binary encoding.
//!
//! [`runner`] calibrates and measures, [`snippets`] holds the measured code,
//! [`report`] turns outcomes into text or JSON.

pub mod alloc;
pub mod fixture;
pub mod report;
pub mod runner;
pub mod scratch;
pub mod snippets;

#[cfg(test)]
mod alloc_test;

pub use report::{Measurement, Outcome, Report};
pub use runner::{BenchTarget, Bencher, Benchmark, CalibrationConfig, Registry, RunConfig, Runner};
