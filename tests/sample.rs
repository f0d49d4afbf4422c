use sammeboost::prelude::*;

use std::fs;
use std::path::PathBuf;


fn write_csv(name: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(name);
    fs::write(&path, content).unwrap();
    path
}


#[test]
fn csv_with_header_and_target_column() {
    let path = write_csv(
        "sammeboost_header.csv",
        "x1,x2,class\n\
         0.0, 1.0, 0\n\
         1.0, 0.0, 1\n\
         2.0, 1.0, 0\n",
    );

    let sample = Sample::from_csv(&path, true)
        .unwrap()
        .set_target("class");

    assert_eq!(sample.shape(), (3, 2));
    assert_eq!(sample.target(), &[0.0, 1.0, 0.0]);
    assert_eq!(sample.classes(), vec![0, 1]);
    assert_eq!(sample["x2"][0], 1.0);

    fs::remove_file(path).unwrap();
}


#[test]
fn csv_without_header_gets_dummy_names() {
    let path = write_csv(
        "sammeboost_no_header.csv",
        "0.5, 1.5\n2.5, 3.5\n",
    );

    let sample = Sample::from_csv(&path, false).unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample["Feat. [1]"][1], 2.5);

    fs::remove_file(path).unwrap();
}


#[test]
fn malformed_csv_reports_the_line() {
    let path = write_csv(
        "sammeboost_malformed.csv",
        "x1,class\n1.0, 0\noops, 1\n",
    );

    let result = Sample::from_csv(&path, true);
    assert!(matches!(result, Err(BoostError::Parse { line: 3, .. })));

    fs::remove_file(path).unwrap();
}


#[test]
fn fitting_a_csv_sample_end_to_end() {
    let mut content = String::from("x1,x2,class\n");
    for i in 0..40 {
        let x = i as f64 / 10.0;
        let label = usize::from(i >= 20);
        content.push_str(&format!("{x}, {}, {label}\n", -x));
    }
    let path = write_csv("sammeboost_end_to_end.csv", &content);

    let sample = Sample::from_csv(&path, true)
        .unwrap()
        .set_target("class");

    let mut adaboost = AdaBoostClassifier::new()
        .n_estimators(5)
        .algorithm(Algorithm::Samme);
    let score = adaboost.fit(&sample, None)
        .unwrap()
        .score(&sample)
        .unwrap();

    // The two classes are separated by a threshold on `x1`.
    assert_eq!(score, 1.0);

    fs::remove_file(path).unwrap();
}
