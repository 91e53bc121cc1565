use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use regex::Regex;
use wireperf_core::alloc::TrackingAllocator;
use wireperf_core::report::{render_json, render_text};
use wireperf_core::{BenchTarget, CalibrationConfig, Registry, Report, RunConfig, Runner};


#[global_allocator]
static GLOBAL_ALLOCATOR: TrackingAllocator = TrackingAllocator;

const DEFAULT_TRACE_FILTER: &str = "wireperf=debug";

#[derive(Debug, Parser)]
#[command(
    name = "wireperf",
    author,
    version,
    about = "Micro-benchmarks for database driver hot paths",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Without a subcommand, behave like `run`
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Calibrate and measure the selected benchmarks.
    Run(RunArgs),
    /// Print benchmark names without running them.
    List {
        /// Only list benchmarks whose name matches this regular expression
        #[arg(long, value_name = "REGEX")]
        bench: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Only run benchmarks whose name matches this regular expression
    #[arg(long, value_name = "REGEX")]
    bench: Option<String>,

    /// Run each benchmark for this long (`1s`, `250ms`) or exactly N times (`100x`)
    #[arg(long, value_name = "TIME|Nx", default_value = "1s")]
    benchtime: BenchTarget,

    /// Measure each benchmark this many times
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Report bytes and allocations per operation
    #[arg(long)]
    benchmem: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory for the scratch files of the file-write benchmarks
    #[arg(long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// How `WIREPERF_TRACE` asks for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TraceSetting {
    Off,
    /// Switched on without a filter: use `RUST_LOG`, else the default.
    On,
    Filter(String),
}

impl TraceSetting {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" | "no" => TraceSetting::Off,
            "1" | "true" | "on" | "yes" => TraceSetting::On,
            _ => TraceSetting::Filter(raw.trim().to_string()),
        }
    }

    /// Filter directives to install, or `None` when tracing stays off.
    fn directives(&self, rust_log: Option<&str>) -> Option<String> {
        match self {
            TraceSetting::Off => None,
            TraceSetting::On => Some(rust_log.unwrap_or(DEFAULT_TRACE_FILTER).to_string()),
            TraceSetting::Filter(expr) => Some(expr.clone()),
        }
    }
}

/// Install a stderr subscriber for runner and scratch-file events when
/// `WIREPERF_TRACE` is set.
fn maybe_init_tracing() {
    let Ok(raw) = std::env::var("WIREPERF_TRACE") else {
        return;
    };
    let rust_log = std::env::var("RUST_LOG").ok();
    let Some(directives) = TraceSetting::parse(&raw).directives(rust_log.as_deref()) else {
        return;
    };

    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn compile_filter(raw: Option<&str>) -> anyhow::Result<Option<Regex>> {
    raw.map(|pattern| Regex::new(pattern).with_context(|| format!("invalid --bench pattern '{}'", pattern)))
        .transpose()
}

fn run_config(args: &RunArgs) -> RunConfig {
    RunConfig {
        calibration: CalibrationConfig {
            target: args.benchtime,
            ..CalibrationConfig::default()
        },
        count: args.count,
        track_allocations: args.benchmem,
        scratch_dir: args.dir.clone(),
    }
}

/// Run the selected benchmarks and write the report to `out`. Returns
/// whether every benchmark passed.
fn run_benchmarks<W: Write>(registry: &Registry, args: &RunArgs, out: &mut W) -> anyhow::Result<bool> {
    let pattern = compile_filter(args.bench.as_deref())?;
    let selected = registry.matching(pattern.as_ref());
    if selected.is_empty() {
        anyhow::bail!(
            "no benchmarks match '{}'; use `wireperf list` to see them",
            args.bench.as_deref().unwrap_or_default()
        );
    }

    let runner = Runner::new(run_config(args))?;
    let report = Report::new(runner.run(&selected), Utc::now());
    let rendered = match args.format {
        OutputFormat::Text => render_text(&report, args.benchmem),
        OutputFormat::Json => render_json(&report)?,
    };
    out.write_all(rendered.as_bytes()).context("write report")?;
    if args.format == OutputFormat::Json {
        writeln!(out).context("write report")?;
    }
    out.flush().context("flush report")?;
    Ok(report.passed())
}

fn list_benchmarks<W: Write>(registry: &Registry, bench: Option<&str>, out: &mut W) -> anyhow::Result<()> {
    let pattern = compile_filter(bench)?;
    for b in registry.matching(pattern.as_ref()) {
        writeln!(out, "{}", b.display_name()).context("write benchmark list")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let CliArgs { command, run } = CliArgs::parse();
    let registry = Registry::default_suite();
    let mut stdout = std::io::stdout().lock();

    match command.unwrap_or(Commands::Run(run)) {
        Commands::List { bench } => list_benchmarks(&registry, bench.as_deref(), &mut stdout),
        Commands::Run(args) => {
            if !run_benchmarks(&registry, &args, &mut stdout)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
