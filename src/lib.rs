//! Per-token Bayes' rule text classification.
//!
//! Raw training rows carry their label as the first token. For a test vector,
//! each label scores the sum over test tokens of
//! `P(token|label) * P(label) / P(token)`, and the strictly highest positive
//! score wins. When no label scores above zero the configured fallback label
//! is reported instead.
//!
//! ```
//! use token_bayes::{predict, Vector};
//!
//! let rows: Vec<Vector> = vec![
//!     vec!["A".into(), "x".into(), "y".into()],
//!     vec!["B".into(), "y".into(), "z".into()],
//! ];
//! let test = vec!["z".to_string()];
//!
//! let prediction = predict(Some(rows.as_slice()), Some(test.as_slice()))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(prediction.label(), "B");
//! ```

pub mod bayes;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod partition;
pub mod posterior;

pub use bayes::{predict, BayesClassifier, LabelScore, Prediction};
pub use config::{ClassifierConfig, LoaderConfig};
pub use error::{BayesError, Result};
pub use partition::{partition, GroupedTrainingSet, Vector};
