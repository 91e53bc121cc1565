//! Sequential benchmark runner.
//!
//! Each registered benchmark is calibrated independently: its body is invoked
//! with growing iteration counts until one sub-run lasts as long as the
//! configured target, and that final sub-run is what gets reported. A body
//! that returns an error only fails itself; the runner moves on to the next
//! benchmark.

pub mod calibrate;
mod registry;

#[cfg(test)]
mod calibrate_test;
#[cfg(test)]
mod registry_test;

pub use calibrate::{BenchTarget, CalibrationConfig, next_iterations};
pub use registry::{BenchFn, Benchmark, Registry};

use anyhow::{Context, Result, anyhow, ensure};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::alloc::AllocSnapshot;
use crate::report::{Measurement, Outcome};

const TRACE_TARGET: &str = "wireperf::runner";

/// Controller handed to a benchmark body for one sub-run.
#[derive(Debug)]
pub struct Bencher {
    iterations: u64,
    scratch_dir: PathBuf,
    elapsed: Duration,
    allocs: AllocSnapshot,
    measured: bool,
}

impl Bencher {
    pub(crate) fn new(iterations: u64, scratch_dir: &Path) -> Self {
        Self {
            iterations,
            scratch_dir: scratch_dir.to_path_buf(),
            elapsed: Duration::ZERO,
            allocs: AllocSnapshot::default(),
            measured: false,
        }
    }

    /// Iteration bound `N` for this sub-run.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Directory where file benchmarks create their scratch files.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Run `body` `N` times, timing only this loop. The first error stops the
    /// loop and is returned with the failing iteration attached.
    pub fn iter<F>(&mut self, mut body: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        let iterations = self.iterations;
        let before = AllocSnapshot::take();
        let start = Instant::now();
        let mut outcome = Ok(());
        for i in 0..iterations {
            if let Err(err) = body(i) {
                outcome = Err(err.context(format!("iteration {} of {}", i, iterations)));
                break;
            }
        }
        self.elapsed += start.elapsed();
        self.allocs = self.allocs.plus(&before.delta(&AllocSnapshot::take()));
        self.measured = true;
        outcome
    }

    /// Diagnostic error for an invariant the benchmark body found broken.
    pub fn fail(msg: impl Display) -> anyhow::Error {
        anyhow!("{}", msg)
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub calibration: CalibrationConfig,
    /// Independent measurements per benchmark.
    pub count: u32,
    pub track_allocations: bool,
    pub scratch_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationConfig::default(),
            count: 1,
            track_allocations: false,
            scratch_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.calibration.validate().context("invalid calibration settings")?;
        ensure!(config.count >= 1, "count must be >= 1");
        Ok(Self { config })
    }

    /// Run every benchmark `count` times, one after the other. A failure ends
    /// that benchmark's repetitions but not the run.
    pub fn run(&self, benchmarks: &[Benchmark]) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(benchmarks.len() * self.config.count as usize);
        for bench in benchmarks {
            for _ in 0..self.config.count {
                match self.run_one(bench) {
                    Ok(measurement) => outcomes.push(Outcome::Passed(measurement)),
                    Err(err) => {
                        warn!(
                            target: TRACE_TARGET,
                            benchmark = bench.name,
                            error = %format!("{:#}", err),
                            "benchmark failed"
                        );
                        outcomes.push(Outcome::Failed {
                            name: bench.display_name(),
                            error: format!("{:#}", err),
                        });
                        break;
                    }
                }
            }
        }
        outcomes
    }

    /// Calibrate and measure a single benchmark.
    pub fn run_one(&self, bench: &Benchmark) -> Result<Measurement> {
        let calibration = &self.config.calibration;
        let mut iterations = calibration.initial_iterations();
        loop {
            let mut bencher = Bencher::new(iterations, &self.config.scratch_dir);
            (bench.run)(&mut bencher)?;
            ensure!(bencher.measured, "{} never called Bencher::iter", bench.display_name());
            debug!(
                target: TRACE_TARGET,
                benchmark = bench.name,
                iterations,
                elapsed_ns = bencher.elapsed.as_nanos() as u64,
                "sub-run finished"
            );
            match next_iterations(iterations, bencher.elapsed, calibration) {
                Some(next) => iterations = next,
                None => {
                    let allocs = self.config.track_allocations.then_some(bencher.allocs);
                    return Ok(Measurement::new(
                        bench.display_name(),
                        iterations,
                        bencher.elapsed,
                        allocs,
                    ));
                }
            }
        }
    }
}
