use std::fs;

use tempfile::tempdir;
use token_bayes::loader::load_training_rows;
use token_bayes::{
    predict, BayesClassifier, BayesError, ClassifierConfig, LoaderConfig, Prediction, Vector,
};

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

const TRAINING: &str = "\
anime OnePiece Roger Luffy
anime Naruto ninja
sports football goal
sports Goal tennis
";

#[test]
fn test_predicts_from_training_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("train.txt");
    fs::write(&path, TRAINING).unwrap();

    let rows = load_training_rows(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(rows.len(), 4);

    let test = tokens(&["onepiece", "roger"]);
    let prediction = predict(Some(rows.as_slice()), Some(test.as_slice()))
        .unwrap()
        .unwrap();
    assert_eq!(prediction.label(), "anime");

    let test = tokens(&["GOAL"]);
    let prediction = predict(Some(rows.as_slice()), Some(test.as_slice()))
        .unwrap()
        .unwrap();
    assert_eq!(prediction.label(), "sports");
}

#[test]
fn test_rows_are_reusable_across_predictions() {
    let rows: Vec<Vector> = vec![tokens(&["A", "x", "y"]), tokens(&["B", "y", "z"])];
    let before = rows.clone();
    let test = tokens(&["y"]);

    let first = predict(Some(rows.as_slice()), Some(test.as_slice())).unwrap();
    let second = predict(Some(rows.as_slice()), Some(test.as_slice())).unwrap();

    assert_eq!(first, second);
    assert_eq!(rows, before);
    assert!(!first.unwrap().is_fallback());
}

#[test]
fn test_corpus_absent_token_falls_back() {
    let rows: Vec<Vector> = vec![tokens(&["A", "x"])];
    let test = tokens(&["q"]);

    let prediction = predict(Some(rows.as_slice()), Some(test.as_slice())).unwrap();
    assert_eq!(prediction, Some(Prediction::Fallback("other".to_string())));
}

#[test]
fn test_batch_writes_results_csv() {
    let dir = tempdir().unwrap();
    let train = dir.path().join("train.txt");
    let input = dir.path().join("test.txt");
    let output = dir.path().join("result.csv");
    fs::write(&train, TRAINING).unwrap();
    fs::write(&input, "ninja naruto\n\ntennis\nunknown words\n").unwrap();

    let classifier = BayesClassifier::new(ClassifierConfig::default().with_fallback_label("none"));
    let count = classifier
        .predict_file(
            train.as_path(),
            input.as_path(),
            output.as_path(),
            &LoaderConfig::default(),
        )
        .unwrap();
    assert_eq!(count, 3);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "ID,Label\n1,anime\n2,sports\n3,none\n");
}

#[test]
fn test_batch_with_empty_training_file_fails() {
    let dir = tempdir().unwrap();
    let train = dir.path().join("train.txt");
    let input = dir.path().join("test.txt");
    fs::write(&train, "").unwrap();
    fs::write(&input, "x\n").unwrap();

    let err = BayesClassifier::default()
        .predict_file(
            train.as_path(),
            input.as_path(),
            dir.path().join("out.csv").as_path(),
            &LoaderConfig::default(),
        )
        .unwrap_err();
    assert!(matches!(err, BayesError::EmptyTrainingData(_)));
}

#[test]
fn test_case_insensitive_match_is_per_char() {
    let rows: Vec<Vector> = vec![tokens(&["greek", "οδοσ"]), tokens(&["latin", "i"])];

    let test = tokens(&["ΟΔΟΣ"]);
    let prediction = predict(Some(rows.as_slice()), Some(test.as_slice()))
        .unwrap()
        .unwrap();
    assert_eq!(prediction.label(), "greek");

    let test = tokens(&["İ"]);
    let prediction = predict(Some(rows.as_slice()), Some(test.as_slice()))
        .unwrap()
        .unwrap();
    assert_eq!(prediction.label(), "latin");
}
