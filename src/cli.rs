use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stable-match",
    about = "Hospitals/Residents stable matching and verification",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a stable matching with hospital-proposing deferred acceptance
    Match {
        /// Preference file, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Only check that the input parses
        #[arg(long)]
        validate_only: bool,

        /// Print the run receipt (n, proposals, matching root) to stderr
        #[arg(long)]
        receipt: bool,
    },

    /// Check a matching for validity and stability
    Verify {
        /// Preference file, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Matching file with one 'hospital student' pair per line
        #[arg(short, long)]
        matching: PathBuf,
    },
}
