//! This file defines some functions that check some pre-conditions
//! E.g., shape of data, validity of configuration parameters.

use crate::Sample;
use crate::error::BoostError;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<(), BoostError> {
    let (n_sample, n_feature) = sample.shape();
    let n_target = sample.target().len();

    if n_sample != n_target {
        return Err(BoostError::ShapeMismatch { n_sample, n_target });
    }

    if n_sample == 0 || n_feature == 0 {
        return Err(BoostError::InvalidParameter(
            "the training sample is empty".into()
        ));
    }

    Ok(())
}


/// Check whether the given `sample_weight` vector is valid or not.
#[inline(always)]
pub(crate) fn check_sample_weight(weight: &[f64], n_sample: usize)
    -> Result<(), BoostError>
{
    if weight.len() != n_sample {
        return Err(BoostError::WeightLength {
            expected: n_sample,
            got: weight.len(),
        });
    }

    if weight.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(BoostError::InvalidParameter(
            "`sample_weight` entries must be finite and non-negative".into()
        ));
    }

    let z = weight.iter().sum::<f64>();
    if z <= 0.0 {
        return Err(BoostError::InvalidParameter(
            "`sample_weight` sums to zero".into()
        ));
    }

    Ok(())
}


/// Check the configuration of the booster.
#[inline(always)]
pub(crate) fn check_configuration(n_estimators: usize, learning_rate: f64)
    -> Result<(), BoostError>
{
    if n_estimators < 1 {
        return Err(BoostError::InvalidParameter(
            format!("`n_estimators` must be positive, got {n_estimators}")
        ));
    }

    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(BoostError::InvalidParameter(
            format!("`learning_rate` must be positive, got {learning_rate}")
        ));
    }

    Ok(())
}


/// Check that `sample` has the number of features the model was fitted on.
#[inline(always)]
pub(crate) fn check_feature_count(expected: usize, sample: &Sample)
    -> Result<(), BoostError>
{
    let got = sample.shape().1;
    if got != expected {
        return Err(BoostError::FeatureMismatch { expected, got });
    }
    Ok(())
}
