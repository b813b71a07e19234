//! Frequency estimates over a grouped training set.
//!
//! Every estimate is a ratio of counts and resolves a zero denominator to
//! `0.0`. Tokens compare case-insensitively through [`eq_ignore_case`];
//! labels compare exactly.

use crate::partition::{is_blank, GroupedTrainingSet, Vector};

/// Single-char uppercase mapping; chars that expand (`ß` to `SS`) map to
/// themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-char lowercase mapping. The only expanding lowercase mapping is
/// `İ` to `i\u{307}`, whose simple form is the leading `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Char-by-char case-insensitive equality. No whole-string folding, so
/// context-sensitive mappings such as final sigma do not apply.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || simple_upper(x) == simple_upper(y) || simple_lower(x) == simple_lower(y)
        })
}

fn ratio(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    }
}

/// Returns `(matching tokens, all tokens)` across `vectors`.
fn count_matches<'a, I>(vectors: I, token: &str) -> (usize, usize)
where
    I: IntoIterator<Item = &'a Vector>,
{
    vectors
        .into_iter()
        .flatten()
        .fold((0, 0), |(found, total), data| {
            if eq_ignore_case(data, token) {
                (found + 1, total + 1)
            } else {
                (found, total + 1)
            }
        })
}

/// P(token | label): share of the tokens in `label`'s vectors equal to `token`.
pub fn key_given_class(set: &GroupedTrainingSet, label: &str, token: &str) -> f64 {
    if is_blank(token) {
        return 0.0;
    }
    let Some(vectors) = set.group(label) else {
        return 0.0;
    };

    let (found, total) = count_matches(vectors, token);
    ratio(found, total)
}

/// P(label): share of training rows (not tokens) belonging to `label`.
pub fn class_probability(set: &GroupedTrainingSet, label: &str) -> f64 {
    if is_blank(label) {
        return 0.0;
    }
    let Some(vectors) = set.group(label) else {
        return 0.0;
    };

    ratio(vectors.len(), set.total_rows())
}

/// P(token): share of all training tokens, across every label, equal to `token`.
pub fn key_probability(set: &GroupedTrainingSet, token: &str) -> f64 {
    if is_blank(token) {
        return 0.0;
    }

    let (found, total) = count_matches(set.iter().flat_map(|(_, vectors)| vectors.iter()), token);
    ratio(found, total)
}
