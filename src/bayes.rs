use std::{fmt, path::Path};

use log::debug;

use crate::config::{ClassifierConfig, LoaderConfig};
use crate::error::Result;
use crate::loader::{load_test_vectors, load_training_rows};
use crate::partition::{partition, GroupedTrainingSet, Vector};
use crate::posterior::score;

/// Aggregate score of one label over a test vector.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Outcome of classifying one test vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// The label with the highest strictly positive aggregate score.
    Label { label: String, score: f64 },
    /// No label scored above zero; holds the configured fallback label.
    Fallback(String),
}

impl Prediction {
    pub fn label(&self) -> &str {
        match self {
            Prediction::Label { label, .. } => label,
            Prediction::Fallback(label) => label,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Prediction::Label { score, .. } => *score,
            Prediction::Fallback(_) => 0.0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Prediction::Fallback(_))
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores test vectors against training rows with per-token Bayes' rule.
///
/// Holds no model: every call partitions the rows it is given and rescans
/// them for each label and token.
#[derive(Debug, Clone, Default)]
pub struct BayesClassifier {
    config: ClassifierConfig,
}

impl BayesClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classifies `test` against the raw labeled `rows`.
    ///
    /// Returns `Ok(None)` when either input is absent or `rows` is empty.
    /// Errors only on a training row with no label.
    pub fn predict(
        &self,
        rows: Option<&[Vector]>,
        test: Option<&[String]>,
    ) -> Result<Option<Prediction>> {
        let (Some(rows), Some(test)) = (rows, test) else {
            return Ok(None);
        };
        let Some(set) = partition(rows)? else {
            return Ok(None);
        };

        Ok(Some(self.decide(&Self::rank(&set, test))))
    }

    /// Sums the posterior score of every test token for each label, in label
    /// order.
    pub fn rank(set: &GroupedTrainingSet, test: &[String]) -> Vec<LabelScore> {
        set.labels()
            .iter()
            .map(|label| {
                let total: f64 = test.iter().map(|token| score(set, label, token)).sum();
                debug!("label {label}: aggregate score {total}");
                LabelScore {
                    label: label.clone(),
                    score: total,
                }
            })
            .collect()
    }

    /// Picks the first label with the strictly greatest score above zero.
    fn decide(&self, scores: &[LabelScore]) -> Prediction {
        let (best, best_score) =
            scores
                .iter()
                .fold((None, 0.0), |(best, best_score), candidate| {
                    if candidate.score > best_score {
                        (Some(candidate), candidate.score)
                    } else {
                        (best, best_score)
                    }
                });

        match best {
            Some(winner) => {
                debug!("predicted {} with score {best_score}", winner.label);
                Prediction::Label {
                    label: winner.label.clone(),
                    score: best_score,
                }
            }
            None => {
                debug!("no label scored above zero, using fallback");
                Prediction::Fallback(self.config.fallback_label.clone())
            }
        }
    }

    /// Classifies every vector in `input` against the training file and writes
    /// an `ID,Label` CSV to `output`. Returns the number of vectors classified.
    pub fn predict_file<P: AsRef<Path>>(
        &self,
        train: P,
        input: P,
        output: P,
        loader: &LoaderConfig,
    ) -> Result<usize> {
        let rows = load_training_rows(train, loader)?;
        let tests = load_test_vectors(input, loader)?;

        let mut results = Vec::with_capacity(tests.len());
        for test in &tests {
            // Loaded rows are never empty, so a prediction is always produced.
            let label = self
                .predict(Some(rows.as_slice()), Some(test.as_slice()))?
                .map(|prediction| prediction.label().to_string())
                .unwrap_or_else(|| self.config.fallback_label.clone());
            results.push(label);
        }

        let mut writer = csv::Writer::from_path(output)?;
        writer.write_record(["ID", "Label"])?;
        for (i, result) in results.iter().enumerate() {
            writer.write_record([(i + 1).to_string(), result.to_string()])?;
        }
        writer.flush()?;

        Ok(results.len())
    }
}

/// Classifies with the default configuration.
pub fn predict(rows: Option<&[Vector]>, test: Option<&[String]>) -> Result<Option<Prediction>> {
    BayesClassifier::default().predict(rows, test)
}
