//! Main entry point for the win-tasklist tool
use anyhow::Context;
use clap::{CommandFactory, Parser};
use log::warn;

use wintasklist::cli::args::Cli;
use wintasklist::formats::traits::{OutputDestination, OutputFormat, OutputWriter};
use wintasklist::schema::SchemaKey;

fn main() {
    // `win-tasklist help` and `win-tasklist h` behave like --help
    if matches!(std::env::args().nth(1).as_deref(), Some("help" | "h")) {
        // Failing to write the usage text to stdout leaves nothing to report
        let _ = Cli::command().print_long_help();
        return;
    }

    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Run the query and write its output, returning the exit code to use.
fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.list_schemas {
        println!("Available schemas:");
        for key in SchemaKey::ALL {
            println!("  {} - {}", key, key.columns().join(", "));
        }
        return Ok(0);
    }

    let options = cli.options();
    let result = wintasklist::tasklist(&options).context("tasklist query failed")?;

    let output_dest = match &cli.output {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };
    let output_writer = OutputWriter::new(OutputFormat::from(cli.format), output_dest);
    output_writer
        .write(&result)
        .context("failed to write tasklist output")?;

    if result.status.success {
        Ok(0)
    } else {
        warn!("tasklist.exe did not succeed (exit code {})", result.status.code);
        Ok(if result.status.code > 0 { result.status.code } else { 1 })
    }
}
