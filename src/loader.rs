//! Flat-file readers for training rows and test vectors.
//!
//! Each line is one vector, split on a single delimiter byte. Consecutive
//! delimiters yield blank tokens, which are dropped. Quotes are ordinary
//! characters.

use std::{fs::File, io::Read, path::Path};

use csv::ReaderBuilder;
use log::{info, warn};

use crate::config::LoaderConfig;
use crate::error::{BayesError, Result};
use crate::partition::{is_blank, Vector};

fn read_vectors<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Vector>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(config.delimiter)
        .from_reader(reader);

    let mut vectors = Vec::new();
    for record in reader.records() {
        let record = record?;

        let vector: Vector = record
            .iter()
            .filter(|token| !is_blank(token))
            .map(str::to_string)
            .collect();

        if vector.is_empty() {
            let line = record.position().map_or(0, |pos| pos.line());
            warn!("skipping line {line}: no tokens");
            continue;
        }
        vectors.push(vector);
    }

    Ok(vectors)
}

/// Reads training rows, label first, from any reader.
///
/// Fails with [`BayesError::EmptyTrainingData`] when nothing is read.
pub fn read_training_rows<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Vector>> {
    read_rows_from(reader, config, "<reader>")
}

/// Reads training rows from a file at `path`.
pub fn load_training_rows<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Vector>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_rows_from(file, config, &path.display().to_string())
}

fn read_rows_from<R: Read>(reader: R, config: &LoaderConfig, origin: &str) -> Result<Vec<Vector>> {
    let rows = read_vectors(reader, config)?;
    if rows.is_empty() {
        return Err(BayesError::EmptyTrainingData(origin.to_string()));
    }

    info!("loaded {} training rows from {origin}", rows.len());
    Ok(rows)
}

/// Reads unlabeled test vectors, one per line. An empty file yields no vectors.
pub fn load_test_vectors<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Vector>> {
    let file = File::open(path.as_ref())?;
    read_vectors(file, config)
}
