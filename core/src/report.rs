//! Per-benchmark measurements and the text / JSON reports built from them.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;

use crate::alloc::AllocSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryPerOp {
    pub bytes_per_op: u64,
    pub allocs_per_op: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub iterations: u64,
    pub elapsed_ns: u64,
    pub ns_per_op: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryPerOp>,
}

impl Measurement {
    pub fn new(name: String, iterations: u64, elapsed: Duration, allocs: Option<AllocSnapshot>) -> Self {
        let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let per_op = iterations.max(1);
        Self {
            name,
            iterations,
            elapsed_ns,
            ns_per_op: elapsed_ns as f64 / per_op as f64,
            memory: allocs.map(|a| MemoryPerOp {
                bytes_per_op: a.bytes / per_op,
                allocs_per_op: a.allocations / per_op,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed(Measurement),
    Failed { name: String, error: String },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Passed(m) => &m.name,
            Outcome::Failed { name, .. } => name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub os: &'static str,
    pub arch: &'static str,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            outcomes,
        }
    }

    pub fn passed(&self) -> bool {
        !self.outcomes.iter().any(Outcome::is_failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }
}

/// Go-style aligned table: one row per passed run, a `--- FAIL` block per
/// failed benchmark and a final `ok` / `FAIL` line.
pub fn render_text(report: &Report, show_memory: bool) -> String {
    let width = report.outcomes.iter().map(|o| o.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "os: {}", report.os);
    let _ = writeln!(out, "arch: {}", report.arch);
    for outcome in &report.outcomes {
        match outcome {
            Outcome::Passed(m) => {
                let _ = write!(out, "{:<width$}\t{:>10}\t{}", m.name, m.iterations, per_op(m.ns_per_op, "ns/op"));
                if show_memory {
                    let mem = m.memory.unwrap_or(MemoryPerOp {
                        bytes_per_op: 0,
                        allocs_per_op: 0,
                    });
                    let _ = write!(
                        out,
                        "\t{:>8} B/op\t{:>8} allocs/op",
                        mem.bytes_per_op, mem.allocs_per_op
                    );
                }
                out.push('\n');
            }
            Outcome::Failed { name, error } => {
                let _ = writeln!(out, "--- FAIL: {}", name);
                for line in error.lines() {
                    let _ = writeln!(out, "    {}", line);
                }
            }
        }
    }
    out.push_str(if report.passed() { "ok\n" } else { "FAIL\n" });
    out
}

// Fewer decimals as the magnitude grows, so columns stay narrow.
fn per_op(value: f64, unit: &str) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || magnitude >= 999.95 {
        format!("{:>10.0} {}", value, unit)
    } else if magnitude >= 99.995 {
        format!("{:>12.1} {}", value, unit)
    } else if magnitude >= 9.9995 {
        format!("{:>13.2} {}", value, unit)
    } else {
        format!("{:>14.3} {}", value, unit)
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize benchmark report")
}
