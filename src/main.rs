//! stable-match - Binary Entry Point
//!
//! Results go to stdout, diagnostics to stderr. Exit status 0 on success,
//! 1 on unreadable or malformed input and on INVALID matchings.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stable_match::engine::{match_hospitals, verify};
use stable_match::text::{parse_instance, read_matching, write_matching};
use stable_match::types::{Instance, MatchReceipt};

mod cli;
use cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Read a whole file, or stdin for `-`
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("could not read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}

fn load_instance(path: &Path) -> Result<Instance> {
    let text = read_source(path)?;
    let instance = match parse_instance(&text) {
        Ok(instance) => instance,
        Err(err) => {
            warn!(path = %path.display(), line = ?err.line(), "preference file rejected");
            return Err(err.into());
        }
    };
    info!(path = %path.display(), n = instance.n(), "instance loaded");
    Ok(instance)
}

fn run_match(input: &Path, validate_only: bool, receipt: bool) -> Result<ExitCode> {
    let instance = load_instance(input)?;
    if validate_only {
        eprintln!("ok (parsed n={})", instance.n());
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = match_hospitals(&instance);
    io::stdout()
        .write_all(write_matching(&outcome.matching).as_bytes())
        .context("could not write matching")?;

    if receipt {
        let receipt = MatchReceipt::from_outcome(&outcome);
        eprintln!(
            "n={} proposals={} root={}",
            receipt.n,
            receipt.proposals,
            receipt.root_hex()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn run_verify(input: &Path, matching: &Path) -> Result<ExitCode> {
    let instance = load_instance(input)?;
    let text = read_source(matching)?;

    let verdict = match read_matching(&text, instance.n()) {
        Ok(candidate) => verify(&instance, &candidate),
        Err(reason) => reason.into(),
    };
    info!(valid = verdict.is_valid(), stable = verdict.is_stable(), "verdict");
    println!("{verdict}");

    Ok(if verdict.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Match {
            input,
            validate_only,
            receipt,
        } => run_match(input, *validate_only, *receipt),
        Commands::Verify { input, matching } => run_verify(input, matching),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("invalid input: {err:#}");
            ExitCode::FAILURE
        }
    }
}
