//! # belief-revision
//!
//! Demo driver for the `belief_revision` library. It runs the worked examples
//! of entailment, contraction and revision against a small knowledge base
//! and prints each base as `Formula: … Order: …` lines.
//!
//! ## Usage
//!
//! ```sh
//! belief-revision [OPTIONS] [SUBCOMMAND]
//! ```
//!
//! Without a subcommand every scenario runs.
//!
//! ### Subcommands
//!
//! -   `entailment`: three entailment queries.
//! -   `contraction`: contract a weakly held belief.
//! -   `revision`: revise with beliefs that contradict the base.
//! -   `all`: every scenario in turn.
//! -   `completions <SHELL>`: print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: log operator decisions at debug level.
//! -   `-s, --stats`: print timing, entailment checks and memory usage.
//! -   `-p, --prover <resolution|truth-table>`: entailment procedure (default: `resolution`).
//! -   `--max-clauses <N>`: clause cap for resolution refutations.
//!
//! `RUST_LOG` overrides the log filter, e.g.
//! `RUST_LOG=contraction=debug,resolution=trace belief-revision contraction`.

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::command_line::cli::{Cli, Commands, CommonOptions, Scenario, run};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod command_line;

/// Global allocator using `tikv-jemallocator`, so memory usage can be read
/// back for `--stats`.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (scenario, common): (Scenario, CommonOptions) = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            return ExitCode::SUCCESS;
        }
        Some(Commands::Entailment { common }) => (Scenario::Entailment, common),
        Some(Commands::Contraction { common }) => (Scenario::Contraction, common),
        Some(Commands::Revision { common }) => (Scenario::Revision, common),
        Some(Commands::All { common }) => (Scenario::All, common),
        None => (Scenario::All, cli.common),
    };

    init_tracing(common.debug);

    match run(scenario, &common) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
