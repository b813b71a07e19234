use crate::frequency::{class_probability, key_given_class, key_probability};
use crate::partition::GroupedTrainingSet;

/// Per-token evidence for `label`: `P(token|label) * P(label) / P(token)`.
///
/// A token that never occurs in the training corpus contributes `0.0`.
pub fn score(set: &GroupedTrainingSet, label: &str, token: &str) -> f64 {
    let pk = key_probability(set, token);
    if pk == 0.0 {
        return 0.0;
    }

    let pkc = key_given_class(set, label, token);
    let pc = class_probability(set, label);
    pkc * pc / pk
}
