//! Error types for token_bayes.
//!
//! Statistically degenerate inputs never surface here; the estimator and
//! scorer resolve them to a zero contribution. These variants cover malformed
//! training data and I/O.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BayesError {
    /// The training resource produced no rows at all.
    #[error("training data is empty: {0}")]
    EmptyTrainingData(String),

    /// A raw training row had no elements, so it carries no label.
    #[error("training row {index} has no label")]
    EmptyRow { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
