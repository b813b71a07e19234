use std::collections::{hash_map::Entry, HashMap};

use crate::error::{BayesError, Result};

/// An ordered sequence of tokens. Raw training rows carry their label first.
pub type Vector = Vec<String>;

/// True for an empty or whitespace-only token.
pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

/// Training rows grouped by label, with the label stripped from each row.
///
/// Labels are enumerated in the order they first appear in the raw rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedTrainingSet {
    labels: Vec<String>,
    groups: HashMap<String, Vec<Vector>>,
}

impl GroupedTrainingSet {
    /// Labels in first-appearance order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn group(&self, label: &str) -> Option<&[Vector]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Every `(label, feature vectors)` pair in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Vector])> {
        self.labels
            .iter()
            .filter_map(|label| self.group(label).map(|vectors| (label.as_str(), vectors)))
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of feature vectors across all groups.
    pub fn total_rows(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Splits raw rows into label groups. The input is left untouched; each
/// group holds fresh copies of the feature tokens.
///
/// Returns `Ok(None)` when there are no rows, and an error for a row with no
/// label.
pub fn partition(rows: &[Vector]) -> Result<Option<GroupedTrainingSet>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let mut labels = Vec::new();
    let mut groups = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        let (label, features) = row.split_first().ok_or(BayesError::EmptyRow { index })?;

        match groups.entry(label.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                labels.push(label.clone());
                entry.insert(Vec::new())
            }
        }
        .push(features.to_vec());
    }

    Ok(Some(GroupedTrainingSet { labels, groups }))
}
