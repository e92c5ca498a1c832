use std::process::ExitCode;
use std::time::Instant;

use clap::ArgGroup;
use clap::Parser;

use annolint_cli::output::{render_json, render_text};
use annolint_cli::{AnnolintOptions, FileReport, run_check};
use annolint_core::CheckConfig;
use annolint_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "annolint",
    about = "annolint: find missing Python type annotations",
    version,
    group = ArgGroup::new("inputs").required(true).args(["files", "dirs"])
)]
pub struct Cli {
    /// Individual files to check (repeatable)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        num_args = 1..,
        action = clap::ArgAction::Append,
        conflicts_with = "dirs"
    )]
    files: Vec<String>,

    /// Directories to scan recursively (repeatable)
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        num_args = 1..,
        action = clap::ArgAction::Append,
        conflicts_with = "files"
    )]
    dirs: Vec<String>,

    /// Suppress return diagnostics for functions that contain no return
    /// statement or contain only bare/None returns
    #[arg(long, default_value_t = false)]
    suppress_none_returning: bool,

    /// Suppress argument diagnostics for dummy arguments, defined as '_'
    #[arg(long, default_value_t = false)]
    suppress_dummy_args: bool,

    /// Suppress all diagnostics for dynamically typed functions
    #[arg(long, default_value_t = false)]
    allow_untyped_defs: bool,

    /// Suppress all diagnostics for dynamically typed nested functions
    #[arg(long, default_value_t = false)]
    allow_untyped_nested: bool,

    /// Allow omitting the return hint on __init__ if at least one argument
    /// is annotated
    #[arg(long, default_value_t = false)]
    mypy_init_return: bool,

    /// Decorators to treat as dispatch markers (comma separated)
    #[arg(
        long = "dispatch-decorators",
        value_name = "NAMES",
        value_delimiter = ',',
        default_value = "singledispatch,singledispatchmethod"
    )]
    dispatch_decorators: Vec<String>,

    /// Decorators to treat as typing.overload markers (comma separated)
    #[arg(
        long = "overload-decorators",
        value_name = "NAMES",
        value_delimiter = ',',
        default_value = "overload"
    )]
    overload_decorators: Vec<String>,

    /// Emit one JSON record per finding instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

/// True when at least one finding or file failure was reported.
pub fn run(args: Cli) -> Result<bool> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = CheckConfig {
        suppress_none_returning: args.suppress_none_returning,
        suppress_dummy_args: args.suppress_dummy_args,
        allow_untyped_defs: args.allow_untyped_defs,
        allow_untyped_nested: args.allow_untyped_nested,
        mypy_init_return: args.mypy_init_return,
        dispatch_decorators: args.dispatch_decorators.into_iter().collect(),
        overload_decorators: args.overload_decorators.into_iter().collect(),
    };
    let opts = AnnolintOptions {
        files: args.files,
        dirs: args.dirs,
        config,
    };

    let reports = run_check(&opts)?;

    let rendered = if args.json {
        render_json(&reports)?
    } else {
        render_text(&reports)
    };
    if !rendered.is_empty() {
        if let Some(ref path) = args.output {
            std::fs::write(path, format!("{rendered}\n"))?;
            tracing::info!(path, "output written");
        } else {
            println!("{rendered}");
        }
    }

    let findings: usize = reports.iter().map(FileReport::diagnostic_count).sum();
    let failures = reports.iter().filter(|report| report.is_failed()).count();

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, findings, failures, "complete");

    Ok(findings > 0 || failures > 0)
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
