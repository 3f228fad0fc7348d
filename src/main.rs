//! plateau-rover command-line driver.
//!
//! Reads a mission document, runs every rover and prints one result line per rover.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plateau_rover::{Mission, RoverConfig, RoverInterpreter, RoverReport};
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: u8 = 0;
/// Exit code for input that fails validation.
const EXIT_INVALID: u8 = 2;

/// Drive rovers across a rectangular plateau.
///
/// Input: the top-right corner as "X Y", then two lines per rover: its start
/// position "X Y H" (H is one of N, E, S, W) and a command string of M, L and R.
#[derive(Parser, Debug)]
#[command(name = "plateau-rover")]
#[command(version, about, long_about)]
struct Cli {
    /// Read the mission from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let input = read_input(cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = process(&input, cli.format, &mut out, &mut io::stderr())?;
    out.flush().context("flushing stdout")?;
    Ok(status)
}

/// Runs the mission in `input`, writing results to `out` and a validation error to `err`.
///
/// Returns the process exit status: `0` on success, [`EXIT_INVALID`] for a mission
/// that fails validation.
fn process(input: &str, format: Format, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let config = RoverConfig::default();

    let result = Mission::parse(input, &config).and_then(|mission| {
        info!(rovers = mission.rovers.len(), "Running mission");
        RoverInterpreter::standard(config.clone()).run_mission(&mission)
    });

    match result {
        Ok(reports) => {
            write_reports(out, &reports, format)?;
            Ok(EXIT_SUCCESS)
        }
        Err(invalid) => {
            writeln!(err, "error: {invalid}")?;
            Ok(EXIT_INVALID)
        }
    }
}

fn write_reports(out: &mut impl Write, reports: &[RoverReport], format: Format) -> Result<()> {
    match format {
        Format::Text if reports.is_empty() => writeln!(out, "Rovers are empty")?,
        Format::Text => {
            for report in reports {
                writeln!(out, "{report}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, reports).context("serializing reports")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading mission from {}", path.display()));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut input = String::new();
        stdin
            .lock()
            .read_to_string(&mut input)
            .context("reading mission from stdin")?;
        return Ok(input);
    }

    prompt_input(stdin.lock(), &mut io::stderr())
}

/// Interactive flow: ask for the bounds, then read rover lines until EOF.
///
/// Blank lines are kept, so a rover can be given an empty command string.
fn prompt_input(mut stdin: impl BufRead, prompt: &mut impl Write) -> Result<String> {
    write!(prompt, "Enter top-right coordinates (X Y): ")?;
    prompt.flush()?;

    let mut input = String::new();
    stdin.read_line(&mut input).context("reading bounds")?;
    if !input.ends_with('\n') {
        input.push('\n');
    }

    writeln!(
        prompt,
        "Enter rovers, two lines each (\"X Y H\" then commands); finish with Ctrl-D:"
    )?;
    stdin
        .read_to_string(&mut input)
        .context("reading rover lines")?;
    Ok(input)
}
