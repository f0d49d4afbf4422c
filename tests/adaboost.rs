use rand::prelude::*;
use sammeboost::prelude::*;

use std::collections::HashSet;


/// A 3-class, 3-feature sample with heavily skewed label frequencies.
fn imbalanced_dataset() -> Sample {
    SyntheticClassification::new()
        .n_samples(10_000)
        .n_features(3)
        .n_classes(3)
        .class_weights(&[0.01, 0.05, 0.94])
        .class_sep(0.8)
        .seed(0)
        .build()
        .unwrap()
}


fn check_adaboost(algorithm: Algorithm) {
    let sample = imbalanced_dataset();
    let (train, test) = StratifiedSplit::new(&sample)
        .seed(1)
        .split();

    let n_estimators = 500;
    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(n_estimators)
        .algorithm(algorithm)
        .random_state(0);
    adaboost.fit(&train, None).unwrap();

    assert_eq!(adaboost.classes(), sample.classes());

    // Check that we have an ensemble of estimators
    // with a consistent size.
    let estimators = adaboost.estimators();
    assert!(estimators.len() > 1);
    assert!(estimators.len() <= n_estimators);

    // Each estimator in the ensemble should have
    // a different random state.
    let states = estimators.iter()
        .map(|est| est.random_state())
        .collect::<HashSet<_>>();
    assert_eq!(states.len(), estimators.len());

    // Check the consistency of the feature importances.
    assert_eq!(adaboost.feature_importances().len(), sample.shape().1);

    // Check the consistency of the prediction outputs.
    let proba = adaboost.predict_proba(&test).unwrap();
    assert_eq!(proba.len(), test.shape().0);
    assert!(proba.iter().all(|row| row.len() == 3));
    assert!(
        proba.iter()
            .all(|row| (row.iter().sum::<f64>() - 1.0).abs() < 1e-9)
    );

    let decision = adaboost.decision_function(&test).unwrap();
    assert!(decision.iter().all(|row| row.len() == 3));

    let score = adaboost.score(&test).unwrap();
    assert!(
        score > 0.6,
        "failed with algorithm {algorithm} and score {score}"
    );

    let predictions = adaboost.predict(&test).unwrap();
    assert_eq!(predictions.len(), test.shape().0);
}


#[test]
fn adaboost_samme() {
    check_adaboost(Algorithm::Samme);
}


#[test]
fn adaboost_samme_r() {
    check_adaboost(Algorithm::SammeR);
}


fn check_sample_weight(algorithm: Algorithm) {
    let sample = imbalanced_dataset();
    let n_sample = sample.shape().0;

    let mut adaboost = AdaBoostClassifier::new()
        .algorithm(algorithm)
        .random_state(0);

    // Predictions should be the same when the weights are all ones.
    let ones = vec![1.0; n_sample];
    let with_ones = adaboost.fit(&sample, Some(&ones[..]))
        .unwrap()
        .predict(&sample)
        .unwrap();
    let without = adaboost.fit(&sample, None)
        .unwrap()
        .predict(&sample)
        .unwrap();
    assert_eq!(with_ones, without);

    // A non-uniform weight vector should change the predictions.
    let mut rng = StdRng::seed_from_u64(42);
    let weight = (0..n_sample)
        .map(|_| rng.gen::<f64>())
        .collect::<Vec<_>>();
    let randomized = adaboost.fit(&sample, Some(&weight[..]))
        .unwrap()
        .predict(&sample)
        .unwrap();
    assert_ne!(without, randomized);
}


#[test]
fn adaboost_sample_weight_samme() {
    check_sample_weight(Algorithm::Samme);
}


#[test]
fn adaboost_sample_weight_samme_r() {
    check_sample_weight(Algorithm::SammeR);
}


#[test]
fn same_random_state_reproduces_the_predictions() {
    let sample = SyntheticClassification::new()
        .n_samples(500)
        .n_features(3)
        .n_classes(3)
        .seed(3)
        .build()
        .unwrap();

    let fit_predict = || {
        let mut adaboost = AdaBoostClassifier::new()
            .n_estimators(30)
            .random_state(777);
        adaboost.fit(&sample, None)
            .unwrap()
            .predict(&sample)
            .unwrap()
    };

    assert_eq!(fit_predict(), fit_predict());
}


#[test]
fn single_estimator_yields_a_single_learner() {
    let sample = SyntheticClassification::new()
        .n_samples(200)
        .seed(0)
        .build()
        .unwrap();

    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(1);
    adaboost.fit(&sample, None).unwrap();

    assert_eq!(adaboost.estimators().len(), 1);
    assert_eq!(adaboost.estimator_weights().len(), 1);
}


#[test]
fn single_class_input_is_an_error() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![2.0, 2.0]];
    let target = vec![5.0, 5.0, 5.0];
    let sample = Sample::from_rows(rows, target).unwrap();

    let mut adaboost = AdaBoostClassifier::new();
    let result = adaboost.fit(&sample, None);
    assert!(matches!(result, Err(BoostError::SingleClass(5))));
}


#[test]
fn zero_estimators_is_an_error() {
    let sample = SyntheticClassification::new().build().unwrap();

    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(0);
    let result = adaboost.fit(&sample, None);
    assert!(matches!(result, Err(BoostError::InvalidParameter(_))));
}


#[test]
fn mismatched_sample_weight_is_an_error() {
    let sample = SyntheticClassification::new().build().unwrap();
    let n_sample = sample.shape().0;

    let weight = vec![1.0; n_sample - 1];
    let mut adaboost = AdaBoostClassifier::new();
    let result = adaboost.fit(&sample, Some(&weight[..]));
    assert!(matches!(result, Err(BoostError::WeightLength { .. })));
}


#[test]
fn prediction_before_fit_is_an_error() {
    let sample = SyntheticClassification::new().build().unwrap();

    let adaboost = AdaBoostClassifier::new();
    assert!(matches!(
        adaboost.predict(&sample),
        Err(BoostError::NotFitted)
    ));
}


#[test]
fn predicting_with_the_wrong_feature_count_is_an_error() {
    let sample = SyntheticClassification::new()
        .n_features(3)
        .seed(0)
        .build()
        .unwrap();
    let narrow = SyntheticClassification::new()
        .n_features(2)
        .seed(0)
        .build()
        .unwrap();

    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(5);
    adaboost.fit(&sample, None).unwrap();

    assert!(matches!(
        adaboost.predict(&narrow),
        Err(BoostError::FeatureMismatch { expected: 3, got: 2 })
    ));
}


#[test]
fn fitted_model_round_trips_through_json() {
    let sample = SyntheticClassification::new()
        .n_samples(300)
        .n_features(3)
        .n_classes(3)
        .seed(5)
        .build()
        .unwrap();

    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(10)
        .random_state(1);
    adaboost.fit(&sample, None).unwrap();

    let serialized = serde_json::to_string(&adaboost).unwrap();
    let restored: AdaBoostClassifier =
        serde_json::from_str(&serialized).unwrap();

    assert_eq!(
        adaboost.predict(&sample).unwrap(),
        restored.predict(&sample).unwrap(),
    );
}
