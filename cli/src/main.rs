use std::sync::Once;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use ubench_core::perf::scenarios::{PreparedScenario, prepare_scenarios};
use ubench_core::timing::time_workload;


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "ubench::timing=debug,ubench_core=info,ubench_cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "ubench",
    author,
    version,
    about = "Interpreter-baseline micro-benchmark runner",
    long_about = None
)]
struct CliArgs {
    /// Subcommands like `run` and `list`; bare `ubench` runs every suite
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run benchmark suites through the scenario registry (all when none named).
    Run {
        /// Scenario keys, e.g. `mandel_grid`; see `ubench list`
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// List the available scenarios and their repetition counts.
    List,
}

fn main() -> Result<()> {
    maybe_init_trace();
    let args = CliArgs::parse();
    match args.command {
        Some(Commands::List) => {
            list_scenarios();
            Ok(())
        }
        Some(Commands::Run { keys }) => run_scenarios(&keys),
        None => run_scenarios(&[]),
    }
}

fn list_scenarios() {
    for scenario in prepare_scenarios() {
        println!(
            "{:<20} {:<40} {} repetitions",
            scenario.key(),
            scenario.title(),
            scenario.repetitions()
        );
    }
}

fn run_scenarios(keys: &[String]) -> Result<()> {
    for scenario in select_scenarios(keys)? {
        for _ in 0..scenario.repetitions() {
            let (outcome, elapsed_ms) = time_workload(|| scenario.run());
            let sample = outcome?;
            println!("{} took {:.3} ms | {}", scenario.title(), elapsed_ms, sample);
        }
    }
    Ok(())
}

fn select_scenarios(keys: &[String]) -> Result<Vec<PreparedScenario>> {
    let all = prepare_scenarios();
    if keys.is_empty() {
        return Ok(all);
    }
    let mut picked = Vec::with_capacity(keys.len());
    for key in keys {
        match all.iter().find(|scenario| scenario.key() == key.as_str()) {
            Some(scenario) => picked.push(scenario.clone()),
            None => bail!("unknown scenario '{}'; run `ubench list` to see available keys", key),
        }
    }
    Ok(picked)
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional stderr tracing, gated on `UBENCH_TRACE`. The benchmark lines on
/// stdout stay untouched either way.
fn maybe_init_trace() {
    let raw = match std::env::var("UBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}
