#![allow(clippy::cast_precision_loss)]

use crate::command_line::scenarios;
use belief_revision::logic::resolution::DEFAULT_MAX_CLAUSES;
use belief_revision::{
    BeliefError, BeliefReviser, Formula, Prover, ResolutionConfig, ResolutionProver,
    TruthTableProver,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the belief revision demo.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "belief-revision",
    version,
    about = "AGM belief revision over propositional logic"
)]
pub(crate) struct Cli {
    /// The scenario to run. Runs every scenario when omitted.
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check entailment on three small knowledge bases.
    Entailment {
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Contract a weakly held belief out of a knowledge base.
    Contraction {
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Revise a knowledge base with beliefs that contradict it.
    Revision {
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Run every scenario in turn.
    All {
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// The scenario selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scenario {
    Entailment,
    Contraction,
    Revision,
    All,
}

/// Options shared by every scenario.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommonOptions {
    /// Log operator decisions at debug level. `RUST_LOG` takes precedence.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Print timing, entailment checks and memory usage after the run.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// Decision procedure used for entailment.
    #[arg(short, long, default_value_t = ProverType::Resolution)]
    pub(crate) prover: ProverType,

    /// Give up a resolution refutation once this many clauses are held.
    #[arg(long, default_value_t = DEFAULT_MAX_CLAUSES)]
    pub(crate) max_clauses: usize,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            debug: false,
            stats: false,
            prover: ProverType::default(),
            max_clauses: DEFAULT_MAX_CLAUSES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub(crate) enum ProverType {
    /// Refutation by resolution over clauses.
    #[default]
    Resolution,
    /// Enumeration of every valuation.
    TruthTable,
}

impl Display for ProverType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution => write!(f, "resolution"),
            Self::TruthTable => write!(f, "truth-table"),
        }
    }
}

/// Wraps a prover and counts the entailment checks made through it.
#[derive(Debug)]
pub(crate) struct CountingProver<P: Prover> {
    inner: P,
    checks: Cell<usize>,
}

impl<P: Prover> CountingProver<P> {
    pub(crate) const fn new(inner: P) -> Self {
        Self {
            inner,
            checks: Cell::new(0),
        }
    }

    pub(crate) fn checks(&self) -> usize {
        self.checks.get()
    }
}

impl<P: Prover> Prover for CountingProver<P> {
    fn entails(&self, premises: &[Formula], goal: &Formula) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.inner.entails(premises, goal)
    }
}

/// Runs `scenario` with the prover selected in `common`.
///
/// # Errors
///
/// Propagates any `BeliefError` raised by the scenario.
pub(crate) fn run(scenario: Scenario, common: &CommonOptions) -> Result<(), BeliefError> {
    match common.prover {
        ProverType::Resolution => {
            let prover = ResolutionProver::with_config(ResolutionConfig {
                max_clauses: common.max_clauses,
            });
            run_with(scenario, common, prover)
        }
        ProverType::TruthTable => run_with(scenario, common, TruthTableProver::new()),
    }
}

fn run_with<P: Prover>(
    scenario: Scenario,
    common: &CommonOptions,
    prover: P,
) -> Result<(), BeliefError> {
    let reviser = BeliefReviser::with_prover(CountingProver::new(prover));
    let time = Instant::now();

    match scenario {
        Scenario::Entailment => scenarios::entailment(&reviser),
        Scenario::Contraction => scenarios::contraction(&reviser)?,
        Scenario::Revision => scenarios::revision(&reviser)?,
        Scenario::All => {
            scenarios::entailment(&reviser);
            scenarios::contraction(&reviser)?;
            scenarios::revision(&reviser)?;
        }
    }

    let elapsed = time.elapsed();
    if common.stats {
        print_stats(common, elapsed, reviser.prover().checks());
    }
    Ok(())
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
fn memory_usage() -> Result<(f64, f64), tikv_jemalloc_ctl::Error> {
    epoch::advance()?;
    let allocated = stats::allocated::read()?;
    let resident = stats::resident::read()?;
    Ok((
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    ))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

fn print_stats(common: &CommonOptions, elapsed: Duration, checks: usize) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=========================[ Run Statistics ]==========================");
    stat_line("Prover", common.prover);
    if common.prover == ProverType::Resolution {
        stat_line("Clause limit", common.max_clauses);
    }
    stat_line_with_rate("Entailment checks", checks, elapsed_secs);
    match memory_usage() {
        Ok((allocated, resident)) => {
            stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
            stat_line("Resident memory (MiB)", format!("{resident:.2}"));
        }
        Err(e) => eprintln!("Unable to read memory statistics: {e}"),
    }
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
