//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_FALLBACK_LABEL;

/// Classify token vectors with per-token Bayes' rule
#[derive(Parser, Debug, Clone)]
#[command(name = "token_bayes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct BayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl BayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single test vector
    Predict(PredictArgs),

    /// Classify every line of a file and write an ID,Label CSV
    Batch(BatchArgs),
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct TrainingArgs {
    /// Training data file, one labeled row per line
    #[arg(short, long, env = "TOKEN_BAYES_TRAIN")]
    pub train: PathBuf,

    /// Label printed when no class scores above zero
    #[arg(long, env = "TOKEN_BAYES_FALLBACK", default_value = DEFAULT_FALLBACK_LABEL)]
    pub fallback: String,

    /// Token delimiter (a single ASCII character)
    #[arg(long, env = "TOKEN_BAYES_DELIMITER", default_value_t = ' ')]
    pub delimiter: char,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Print every label's aggregate score before the prediction
    #[arg(long)]
    pub explain: bool,

    /// Tokens of the test vector
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Test vectors, one per line
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination CSV
    #[arg(short, long)]
    pub output: PathBuf,
}
