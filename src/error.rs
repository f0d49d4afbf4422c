//! Defines the error type reported by fitting and prediction.
use std::path::PathBuf;

use thiserror::Error;


/// Errors reported to the caller at `fit` or prediction time.
///
/// Early stopping of the boosting loop is **not** an error;
/// it silently shortens the ensemble.
#[derive(Debug, Error)]
pub enum BoostError {
    /// The number of rows and the number of target values disagree.
    #[error("the sample has {n_sample} rows but {n_target} target values")]
    ShapeMismatch {
        /// Number of rows in the feature matrix.
        n_sample: usize,
        /// Number of target values.
        n_target: usize,
    },

    /// The `sample_weight` vector does not match the training sample.
    #[error("`sample_weight` has length {got}, expected {expected}")]
    WeightLength {
        /// Number of training examples.
        expected: usize,
        /// Length of the given weight vector.
        got: usize,
    },

    /// A configuration parameter is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The training sample contains a single class.
    #[error("the target values take a single class ({0}); need at least 2")]
    SingleClass(i64),

    /// A prediction method was called before `fit`.
    #[error("this classifier is not fitted yet; call `fit` first")]
    NotFitted,

    /// The sample to predict has the wrong number of features.
    #[error("the sample has {got} features but the model was fitted on {expected}")]
    FeatureMismatch {
        /// Number of features the model was fitted on.
        expected: usize,
        /// Number of features in the given sample.
        got: usize,
    },

    /// The very first weak learner was no better than random guessing,
    /// so no ensemble could be built at all.
    #[error("the first weak learner performed no better than random guessing")]
    DegenerateLearner,

    /// Failed to read a dataset file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse a value in a dataset file.
    #[error("failed to parse {} at line {line}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// 1-origin line number of the malformed record.
        line: usize,
    },
}
