//! Provides the `WeakLearner` trait.

use crate::Sample;
use crate::hypothesis::Classifier;


/// A trait that defines the behavior of a weak learner.
/// The booster calls [`WeakLearner::produce`] once per round
/// with the current distribution over training examples
/// and a seed derived from the ensemble's base random state.
pub trait WeakLearner {
    /// The type of the hypothesis this learner produces.
    type Hypothesis: Classifier;


    /// Name of this weak learner.
    fn name(&self) -> &str;


    /// Produces a hypothesis fitted to the weighted view of `sample`
    /// given by `dist`.
    /// `dist` is a probability distribution,
    /// `dist[i] >= 0` and `sum(dist) == 1`.
    /// The `seed` is distinct for each round of one boosting run.
    fn produce(&self, sample: &Sample, dist: &[f64], seed: u64)
        -> Self::Hypothesis;
}
