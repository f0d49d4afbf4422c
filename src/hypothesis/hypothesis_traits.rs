use crate::Sample;
use crate::common::utils;


/// A trait that defines the behavior of a multiclass classifier.
/// You only need to implement the `n_classes` and `proba` methods.
///
/// Classes are identified by their index `0..n_classes`;
/// mapping indices back to raw labels is the booster's job.
pub trait Classifier {
    /// Number of classes this hypothesis scores over.
    fn n_classes(&self) -> usize;


    /// Class-probability estimates for the i'th row of `sample`.
    /// The returned vector has length `self.n_classes()`,
    /// is non-negative, and sums to 1.
    fn proba(&self, sample: &Sample, row: usize) -> Vec<f64>;


    /// Predicts the class index of the i'th row of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> usize {
        utils::argmax(&self.proba(sample, row))
    }


    /// Computes the class-probability estimates of all rows.
    fn proba_all(&self, sample: &Sample) -> Vec<Vec<f64>> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.proba(sample, row))
            .collect::<Vec<_>>()
    }


    /// Predicts the class indices of all rows.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
