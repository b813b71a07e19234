use proptest::prelude::*;
use token_bayes::frequency::{
    class_probability, eq_ignore_case, key_given_class, key_probability,
};
use token_bayes::posterior::score;
use token_bayes::{partition, predict, Vector};

fn training_rows() -> impl Strategy<Value = Vec<Vector>> {
    let row = ("[A-D]", prop::collection::vec("[a-fA-F]{1,3}", 0..6)).prop_map(
        |(label, features)| {
            let mut row = vec![label];
            row.extend(features);
            row
        },
    );
    prop::collection::vec(row, 1..20)
}

proptest! {
    #[test]
    fn class_probabilities_sum_to_one(rows in training_rows()) {
        let set = partition(&rows).unwrap().unwrap();
        let total: f64 = set
            .labels()
            .iter()
            .map(|label| class_probability(&set, label))
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum was {}", total);
    }

    #[test]
    fn estimates_stay_in_unit_interval(rows in training_rows(), token in "[a-gA-G]{1,3}") {
        let set = partition(&rows).unwrap().unwrap();
        let pk = key_probability(&set, &token);
        prop_assert!((0.0..=1.0).contains(&pk));

        for label in set.labels() {
            let pkc = key_given_class(&set, label, &token);
            prop_assert!((0.0..=1.0).contains(&pkc));

            let present = set
                .group(label)
                .unwrap()
                .iter()
                .flatten()
                .any(|data| eq_ignore_case(data, &token));
            if !present {
                prop_assert_eq!(pkc, 0.0);
            }
        }
    }

    #[test]
    fn tokens_outside_the_corpus_score_zero(rows in training_rows(), token in "[xyz]{1,3}") {
        let set = partition(&rows).unwrap().unwrap();
        for label in set.labels() {
            prop_assert_eq!(score(&set, label, &token), 0.0);
        }
    }

    #[test]
    fn partition_preserves_rows(rows in training_rows()) {
        let set = partition(&rows).unwrap().unwrap();
        prop_assert_eq!(set.total_rows(), rows.len());
    }

    #[test]
    fn partition_is_idempotent(rows in training_rows()) {
        let before = rows.clone();
        let first = partition(&rows).unwrap();
        let second = partition(&rows).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(rows, before);
    }

    #[test]
    fn prediction_is_deterministic(
        rows in training_rows(),
        test in prop::collection::vec("[a-hA-H]{1,3}", 0..5),
    ) {
        let first = predict(Some(rows.as_slice()), Some(test.as_slice())).unwrap();
        let second = predict(Some(rows.as_slice()), Some(test.as_slice())).unwrap();
        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }
}
