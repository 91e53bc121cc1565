use anyhow::{Result, bail};
use regex::Regex;

use super::Bencher;
use crate::snippets;

/// Body of a benchmark. Setup before [`Bencher::iter`] is not timed.
pub type BenchFn = fn(&mut Bencher) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Benchmark {
    pub name: &'static str,
    pub run: BenchFn,
}

impl Benchmark {
    /// Name as printed in reports, e.g. `BenchmarkParseInt32Text`.
    pub fn display_name(&self) -> String {
        format!("Benchmark{}", self.name)
    }
}

impl std::fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmark").field("name", &self.name).finish()
    }
}

/// Benchmarks in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Benchmark>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every snippet benchmark shipped with wireperf.
    pub fn default_suite() -> Self {
        Self {
            entries: snippets::SUITE.to_vec(),
        }
    }

    pub fn register(&mut self, name: &'static str, run: BenchFn) -> Result<()> {
        if self.entries.iter().any(|b| b.name == name) {
            bail!("benchmark '{}' is already registered", name);
        }
        self.entries.push(Benchmark { name, run });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|b| b.name)
    }

    /// Benchmarks whose bare name (without the `Benchmark` prefix) matches
    /// `pattern`; all of them when there is no pattern.
    pub fn matching(&self, pattern: Option<&Regex>) -> Vec<Benchmark> {
        self.entries
            .iter()
            .filter(|b| pattern.is_none_or(|re| re.is_match(b.name)))
            .copied()
            .collect()
    }
}
