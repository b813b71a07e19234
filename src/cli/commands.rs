//! Command execution for the CLI.

use anyhow::{bail, Context, Result};

use crate::bayes::BayesClassifier;
use crate::cli::args::{BatchArgs, BayesArgs, Command, PredictArgs, TrainingArgs};
use crate::config::{ClassifierConfig, LoaderConfig};
use crate::loader::load_training_rows;
use crate::partition::partition;

/// Execute a CLI command, returning the text to print.
pub fn execute_command(args: BayesArgs) -> Result<String> {
    match args.command {
        Command::Predict(predict) => execute_predict(predict),
        Command::Batch(batch) => execute_batch(batch),
    }
}

fn configs(training: &TrainingArgs) -> Result<(ClassifierConfig, LoaderConfig)> {
    if !training.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", training.delimiter);
    }

    let classifier = ClassifierConfig::default().with_fallback_label(training.fallback.clone());
    let loader = LoaderConfig::default().with_delimiter(training.delimiter as u8);
    Ok((classifier, loader))
}

fn execute_predict(args: PredictArgs) -> Result<String> {
    let (config, loader) = configs(&args.training)?;
    let rows = load_training_rows(&args.training.train, &loader).with_context(|| {
        format!(
            "failed to load training data from {}",
            args.training.train.display()
        )
    })?;

    let mut output = String::new();
    if args.explain {
        if let Some(set) = partition(&rows)? {
            for entry in BayesClassifier::rank(&set, &args.tokens) {
                output.push_str(&format!("{}\t{}\n", entry.label, entry.score));
            }
        }
    }

    let classifier = BayesClassifier::new(config);
    let prediction = classifier
        .predict(Some(rows.as_slice()), Some(args.tokens.as_slice()))?
        .context("no training data to classify against")?;
    output.push_str(prediction.label());

    Ok(output)
}

fn execute_batch(args: BatchArgs) -> Result<String> {
    let (config, loader) = configs(&args.training)?;

    let count = BayesClassifier::new(config)
        .predict_file(
            args.training.train.as_path(),
            args.input.as_path(),
            args.output.as_path(),
            &loader,
        )
        .with_context(|| format!("batch classification into {} failed", args.output.display()))?;

    Ok(format!("classified {count} vectors into {}", args.output.display()))
}
