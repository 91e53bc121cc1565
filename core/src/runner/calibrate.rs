//! Iteration-count calibration.
//!
//! A benchmark first runs with `N = 1`. While the sub-run finishes faster than
//! the target duration, the next `N` is predicted from the observed rate,
//! inflated by a growth factor and clamped so it never grows by more than
//! `max_growth` times in one step.

use anyhow::{Context, Result, anyhow, bail, ensure};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How long each benchmark should run: `1s`, `250ms`, or a fixed `500x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTarget {
    Duration(Duration),
    Iterations(u64),
}

impl Default for BenchTarget {
    fn default() -> Self {
        BenchTarget::Duration(Duration::from_secs(1))
    }
}

impl fmt::Display for BenchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchTarget::Duration(d) => write!(f, "{:?}", d),
            BenchTarget::Iterations(n) => write!(f, "{}x", n),
        }
    }
}

impl FromStr for BenchTarget {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if let Some(count) = trimmed.strip_suffix('x') {
            let n: u64 = count
                .parse()
                .with_context(|| format!("parse iteration count in '{}'", raw))?;
            ensure!(n > 0, "iteration count in '{}' must be positive", raw);
            return Ok(BenchTarget::Iterations(n));
        }
        parse_duration(trimmed).map(BenchTarget::Duration)
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| anyhow!("missing unit in duration '{}' (expected ns, us, ms, s, m or h)", raw))?;
    let (number, unit) = raw.split_at(split);
    let value: f64 = number
        .parse()
        .with_context(|| format!("parse number in duration '{}'", raw))?;
    let nanos_per_unit = match unit {
        "ns" => 1.0,
        "us" | "µs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        other => bail!("unknown unit '{}' in duration '{}'", other, raw),
    };
    let nanos = (value * nanos_per_unit).round();
    ensure!(nanos < u64::MAX as f64, "duration '{}' out of range", raw);
    Ok(Duration::from_nanos(nanos as u64))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    pub target: BenchTarget,
    /// Multiplier applied on top of the predicted iteration count.
    pub growth_factor: f64,
    /// Upper bound on how many times `N` may grow between two sub-runs.
    pub max_growth: u64,
    pub max_iterations: u64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            target: BenchTarget::default(),
            growth_factor: 1.2,
            max_growth: 100,
            max_iterations: 1_000_000_000,
        }
    }
}

impl CalibrationConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.growth_factor.is_finite() && self.growth_factor >= 1.0,
            "growth_factor must be >= 1.0, got {}",
            self.growth_factor
        );
        ensure!(self.max_growth >= 2, "max_growth must be >= 2, got {}", self.max_growth);
        ensure!(self.max_iterations >= 1, "max_iterations must be >= 1");
        if let BenchTarget::Iterations(n) = self.target {
            ensure!(n >= 1, "fixed iteration count must be >= 1");
        }
        Ok(())
    }

    /// `N` of the first sub-run.
    pub fn initial_iterations(&self) -> u64 {
        match self.target {
            BenchTarget::Iterations(n) => n.min(self.max_iterations),
            BenchTarget::Duration(_) => 1,
        }
    }
}

/// Next iteration count after a sub-run of `prev` iterations took `elapsed`,
/// or `None` once the measurement is final.
pub fn next_iterations(prev: u64, elapsed: Duration, config: &CalibrationConfig) -> Option<u64> {
    let BenchTarget::Duration(target) = config.target else {
        return None;
    };
    if elapsed >= target || prev >= config.max_iterations {
        return None;
    }

    let prev = u128::from(prev);
    let elapsed_ns = elapsed.as_nanos().max(1);
    let predicted = target.as_nanos().saturating_mul(prev) / elapsed_ns;
    let inflated = (predicted as f64 * config.growth_factor).round() as u128;
    let next = inflated
        .min(prev.saturating_mul(u128::from(config.max_growth)))
        .max(prev + 1)
        .min(u128::from(config.max_iterations));
    Some(next as u64)
}
