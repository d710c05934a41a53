#![warn(missing_docs)]
//! SolveKit CLI Library
//!
//! This module provides the command-line front end for solution binaries.
//! Use `solvekit::run()` (or `solvekit_cli::run()`) in your main function to
//! run and benchmark the solutions registered in that binary.
//!
//! # Example
//!
//! ```ignore
//! #[solvekit::solution(platform = "ProjectEuler")]
//! fn p1() {
//!     println!("{}", (1..1000).filter(|n| n % 3 == 0 || n % 5 == 0).sum::<u32>());
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     solvekit_cli::run()
//! }
//! ```
//!
//! Then `solutions ProjectEuler.p1-0B100S` runs `p1` a hundred times, prints
//! the statistics table and saves the raw samples.

mod config;
mod executor;
mod platform;
mod specifier;

pub use config::*;
pub use executor::{
    BenchmarkStatistics, ConsoleProgress, ExecutionConfig, MIN_ITERATIONS, ProgressReporter,
    SEPARATOR_WIDTH, compute_statistics, format_benchmark_report, format_failure,
    format_single_run, resolve_solution, run_many, run_once,
};
pub use platform::*;
pub use specifier::{Invocation, MAX_ITERATIONS, RunMode};

use clap::{Parser, Subcommand};
use solvekit_core::{HarnessError, SolutionDef};
use solvekit_report::{ExportOutcome, save_samples};
use solvekit_stats::SampleSet;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Serializes tests that swap process-wide file descriptors
#[cfg(test)]
pub(crate) static FD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// SolveKit CLI arguments
#[derive(Parser, Debug)]
#[command(name = "solvekit")]
#[command(author, version, about = "SolveKit - run and benchmark coding puzzle solutions")]
pub struct Cli {
    /// Optional subcommand; without one the TARGET is run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// What to run: {Platform}.{Name}-{Test}[B{Iterations}][S]
    ///
    /// B{Iterations} benchmarks the solution (Iterations > 2); a trailing S
    /// also saves the raw samples to runtimes_{timestamp}.csv.
    pub target: Option<String>,

    /// Directory containing {Platform}/i_{Name}_{Test}.txt input files
    #[arg(long)]
    pub inputs_dir: Option<PathBuf>,

    /// Directory receiving saved benchmark samples
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Hide the benchmark progress bar
    #[arg(long)]
    pub no_progress_bar: bool,

    /// Configuration file (default: discover solvekit.toml upwards from the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered solutions
    List,
}

/// Run the SolveKit CLI with the process arguments.
/// This is the main entry point for solution binaries.
///
/// # Returns
/// Recognized harness failures are printed and still return `Ok(())`; an
/// error is only returned for problems outside the harness, such as an
/// unreadable `--config` file.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SolveKit CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SolveKitConfig::load(path)?,
        None => SolveKitConfig::discover().unwrap_or_default(),
    };
    let exec_config = build_execution_config(&cli, &config);
    tracing::debug!(?exec_config, "resolved configuration");

    match (&cli.command, &cli.target) {
        (Some(Commands::List), _) => list_solutions(&exec_config),
        (None, Some(target)) => {
            if let Err(error) = run_target(target, &exec_config) {
                tracing::debug!(validation = error.is_validation(), ?error, "run aborted");
                print!("{}", format_failure(&error));
            }
        }
        (None, None) => {
            println!(
                "No solution specified. Pass {{Platform}}.{{Name}}-{{Test}}[B{{Iterations}}][S], \
                 or `list` to see the registered solutions."
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,solvekit={default},solvekit_cli={default},solvekit_core={default},\
             solvekit_report={default},solvekit_stats={default}"
        ))
    });

    // Logs go to stderr so they never mix with the table on stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build an ExecutionConfig by layering: solvekit.toml defaults → CLI overrides.
fn build_execution_config(cli: &Cli, config: &SolveKitConfig) -> ExecutionConfig {
    ExecutionConfig {
        inputs_dir: cli
            .inputs_dir
            .clone()
            .unwrap_or_else(|| config.runner.inputs_dir.clone()),
        export_dir: cli
            .export_dir
            .clone()
            .unwrap_or_else(|| config.output.export_dir.clone()),
        progress_bar: config.runner.progress_bar && !cli.no_progress_bar,
    }
}

fn run_target(target: &str, exec_config: &ExecutionConfig) -> Result<(), HarnessError> {
    let invocation = Invocation::parse(target)?;
    let mut registry = PlatformRegistry::standard(&exec_config.inputs_dir);
    let handler = registry.get_mut(invocation.platform())?;
    let spec = invocation.specifier();

    match invocation.mode() {
        RunMode::Once => {
            let def = resolve_solution(handler, spec)?;
            let nanos = run_once(handler, def, spec)?;
            print!("{}", format_single_run(nanos));
        }
        RunMode::Benchmark { iterations, save } => {
            // Validate before resolving anything.
            if iterations < MIN_ITERATIONS {
                return Err(HarnessError::InvalidIterationCount(iterations));
            }
            let def = resolve_solution(handler, spec)?;
            let mut progress = ConsoleProgress::new(exec_config.progress_bar);
            let samples = run_many(handler, def, spec, iterations, &mut progress)?;

            println!("Computing statistics...");
            let stats = compute_statistics(&samples)
                .ok_or(HarnessError::InvalidIterationCount(samples.len()))?;
            print!("{}", format_benchmark_report(&invocation.qualified_name(), &stats));

            if save {
                export_samples(&samples, exec_config);
            }
        }
    }

    Ok(())
}

/// Export failures never invalidate the report that was already printed.
fn export_samples(samples: &SampleSet, exec_config: &ExecutionConfig) {
    let timestamp = chrono::Utc::now().timestamp();
    match save_samples(&exec_config.export_dir, samples.as_slice(), timestamp) {
        Ok(ExportOutcome::Saved(path)) => {
            println!("\nBenchmark results saved to {}", path.display());
        }
        Ok(ExportOutcome::LockContended(path)) => {
            println!(
                "\nBenchmark results were not saved: {} is locked by another writer.",
                path.display()
            );
        }
        Err(e) => print!("{}", format_failure(&HarnessError::ExportFailed(e))),
    }
}

fn list_solutions(exec_config: &ExecutionConfig) {
    println!("SolveKit Solutions:");

    let registry = PlatformRegistry::standard(&exec_config.inputs_dir);

    let mut platforms: BTreeMap<&str, Vec<&SolutionDef>> = BTreeMap::new();
    for def in solvekit_core::solutions() {
        platforms.entry(def.platform).or_default().push(def);
    }

    let mut total = 0;
    for (platform, defs) in &mut platforms {
        defs.sort_by_key(|def| def.name);
        let note = if registry.contains(platform) {
            ""
        } else {
            " (unsupported platform)"
        };
        println!("├── platform: {}{}", platform, note);
        for def in defs.iter() {
            println!(
                "│   ├── {} [{}] ({}:{})",
                def.name,
                def.entry.shape(),
                def.file,
                def.line
            );
            total += 1;
        }
    }

    println!("{} solutions found.", total);
    println!("Platforms: {}", registry.ids().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_target_and_flags() {
        let cli = Cli::try_parse_from([
            "solvekit",
            "SPOJ.p1-0B10S",
            "--inputs-dir",
            "data",
            "--no-progress-bar",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.target.as_deref(), Some("SPOJ.p1-0B10S"));
        assert_eq!(cli.inputs_dir, Some(PathBuf::from("data")));
        assert!(cli.no_progress_bar);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_list() {
        let cli = Cli::try_parse_from(["solvekit", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn cli_flags_override_config() {
        let mut config = SolveKitConfig::default();
        config.runner.inputs_dir = PathBuf::from("/from/config");
        config.output.export_dir = PathBuf::from("/exports");

        let cli = Cli::try_parse_from(["solvekit", "--inputs-dir", "/from/cli"]).unwrap();
        let exec = build_execution_config(&cli, &config);
        assert_eq!(exec.inputs_dir, PathBuf::from("/from/cli"));
        assert_eq!(exec.export_dir, PathBuf::from("/exports"));
        assert!(exec.progress_bar);

        let cli = Cli::try_parse_from(["solvekit", "--no-progress-bar"]).unwrap();
        assert!(!build_execution_config(&cli, &config).progress_bar);

        config.runner.progress_bar = false;
        let cli = Cli::try_parse_from(["solvekit"]).unwrap();
        assert!(!build_execution_config(&cli, &config).progress_bar);
    }

    #[test]
    fn validation_errors_precede_resolution() {
        let exec = ExecutionConfig::default();

        let err = run_target("Kattis.hello-0", &exec).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownPlatform { .. }));

        // The solution does not exist, but the iteration count is checked first.
        let err = run_target("ProjectEuler.missing-0B2", &exec).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidIterationCount(2)));

        let err = run_target("ProjectEuler.missing-0B3", &exec).unwrap_err();
        assert!(matches!(err, HarnessError::EntryPointNotFound { .. }));

        let err = run_target("ProjectEuler.missing-12", &exec).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidTestNumber(12)));
    }
}
