//! Provides the multiclass AdaBoost classifier by Zhu et al., 2009.
use colored::Colorize;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::common::{checker, utils};
use crate::error::BoostError;
use crate::hypothesis::WeightedMajority;
use crate::weak_learner::{
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    WeakLearner,
};

use super::strategy::{Algorithm, Round};

use std::collections::HashMap;


/// Defines the multiclass AdaBoost classifier.
/// This struct is based on the paper:
/// [Multi-class AdaBoost](https://www.intlpress.com/site/pub/pages/journals/items/sii/content/vols/0002/0003/a008/)
/// by Ji Zhu, Hui Zou, Saharon Rosset, and Trevor Hastie.
///
/// The classifier trains `n_estimators` shallow decision trees
/// sequentially.
/// At each round the training distribution is reweighted so that
/// the next learner focuses on the previously misclassified examples.
/// The loop stops early when a learner attains zero training error,
/// degenerates to chance level, or the weights underflow;
/// early stopping is not an error and merely shortens the ensemble.
///
/// # Example
/// ```
/// use sammeboost::prelude::*;
///
/// let sample = SyntheticClassification::new()
///     .n_samples(300)
///     .n_features(3)
///     .n_classes(3)
///     .seed(0)
///     .build()
///     .unwrap();
///
/// let mut adaboost = AdaBoostClassifier::new()
///     .n_estimators(20)
///     .algorithm(Algorithm::SammeR)
///     .random_state(0);
///
/// let accuracy = adaboost.fit(&sample, None)
///     .unwrap()
///     .score(&sample)
///     .unwrap();
/// assert!(accuracy > 0.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaBoostClassifier {
    // Configuration -----------------------------------------------
    n_estimators: usize,
    algorithm: Algorithm,
    learning_rate: f64,
    max_depth: usize,
    random_state: u64,
    verbose: bool,

    // Fitted state, replaced by each call of `fit` ----------------
    ensemble: Option<WeightedMajority<DecisionTreeClassifier>>,
    classes: Vec<i64>,
    n_feature: usize,
    feature_importances: Vec<f64>,
}


impl AdaBoostClassifier {
    /// Construct a classifier with the default configuration:
    /// 50 estimators, `SAMME.R`, learning rate `1.0`,
    /// decision stumps, base random state `0`.
    pub fn new() -> Self {
        Self {
            n_estimators: 50,
            algorithm: Algorithm::SammeR,
            learning_rate: 1.0,
            max_depth: 1,
            random_state: 0,
            verbose: false,

            ensemble: None,
            classes: Vec::new(),
            n_feature: 0,
            feature_importances: Vec::new(),
        }
    }


    /// Set the number of boosting rounds.
    /// Default value is `50`.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the boosting variant.
    /// Default value is [`Algorithm::SammeR`].
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }


    /// Set the learning rate shrinking each learner's contribution.
    /// Default value is `1.0`.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the maximal depth of the decision tree weak learners.
    /// Default value is `1`, a decision stump.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }


    /// Set the base random state.
    /// Each round derives its own seed from this value,
    /// so two fits with the same state produce identical ensembles.
    /// Default value is `0`.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }


    /// Print one colored line per boosting round.
    /// Default value is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// The sorted distinct class labels discovered by `fit`.
    /// Empty before the first `fit` call.
    pub fn classes(&self) -> &[i64] {
        &self.classes[..]
    }


    /// The fitted weak learners, at most `n_estimators` of them.
    pub fn estimators(&self) -> &[DecisionTreeClassifier] {
        self.ensemble.as_ref()
            .map(|ensemble| &ensemble.hypotheses[..])
            .unwrap_or(&[])
    }


    /// The weight of each fitted weak learner.
    pub fn estimator_weights(&self) -> &[f64] {
        self.ensemble.as_ref()
            .map(|ensemble| &ensemble.weights[..])
            .unwrap_or(&[])
    }


    /// Per-feature aggregated importance, one entry per feature,
    /// summing to 1 when any split was made.
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances[..]
    }


    /// Train the ensemble on `sample`.
    /// `sample_weight` gives the relative importance of each example;
    /// `None` means uniform weighting,
    /// and a vector of equal values behaves identically to `None`.
    ///
    /// Returns `&mut Self` to enable method chaining.
    /// A subsequent call replaces the previously fitted state.
    pub fn fit(&mut self, sample: &Sample, sample_weight: Option<&[f64]>)
        -> Result<&mut Self, BoostError>
    {
        checker::check_sample(sample)?;
        checker::check_configuration(self.n_estimators, self.learning_rate)?;

        let (n_sample, n_feature) = sample.shape();

        let classes = sample.classes();
        if classes.len() < 2 {
            return Err(BoostError::SingleClass(classes[0]));
        }

        // Weak learners are fitted on class codes `0..k`,
        // not on the raw labels.
        let code_of = classes.iter()
            .enumerate()
            .map(|(code, &label)| (label, code))
            .collect::<HashMap<_, _>>();
        let codes = sample.target()
            .iter()
            .map(|y| code_of[&(*y as i64)] as f64)
            .collect::<Vec<_>>();
        let encoded = sample.with_target(codes);

        let mut dist = match sample_weight {
            Some(weight) => {
                checker::check_sample_weight(weight, n_sample)?;
                let mut dist = weight.to_vec();
                utils::normalize(&mut dist[..]);
                dist
            },
            None => vec![1.0 / n_sample as f64; n_sample],
        };

        let learner = DecisionTreeBuilder::new(classes.len())
            .max_depth(self.max_depth)
            .build();
        let strategy = self.algorithm.strategy();

        let mut ensemble = WeightedMajority::new();

        for round in 0..self.n_estimators {
            let seed = derive_seed(self.random_state, round);
            let h = learner.produce(&encoded, &dist[..], seed);

            let weight = match strategy.round(
                &encoded, &mut dist[..], &h, self.learning_rate
            ) {
                Round::Accept(weight) => weight,
                Round::AcceptAndStop(weight) => {
                    ensemble.push(weight, h);
                    self.print_round(round, weight, ensemble.len());
                    break;
                },
                Round::Stop => break,
            };

            ensemble.push(weight, h);
            self.print_round(round, weight, ensemble.len());

            // Renormalize the distribution;
            // stop when the total mass underflows.
            let z = dist.iter().sum::<f64>();
            if !z.is_finite() || z <= f64::EPSILON {
                break;
            }
            dist.par_iter_mut().for_each(|d| *d /= z);
        }

        if ensemble.is_empty() {
            return Err(BoostError::DegenerateLearner);
        }

        self.feature_importances =
            aggregate_importances(&ensemble, n_feature);
        self.classes = classes;
        self.n_feature = n_feature;
        self.ensemble = Some(ensemble);

        Ok(self)
    }


    /// The per-class confidence scores of each row of `sample`,
    /// one row of length `self.classes().len()` per example.
    pub fn decision_function(&self, sample: &Sample)
        -> Result<Vec<Vec<f64>>, BoostError>
    {
        let ensemble = self.ensemble.as_ref()
            .ok_or(BoostError::NotFitted)?;
        checker::check_feature_count(self.n_feature, sample)?;

        let strategy = self.algorithm.strategy();
        let n_class = self.classes.len();
        let n_sample = sample.shape().0;
        let total = ensemble.total_weight();

        let scores = (0..n_sample).into_par_iter()
            .map(|row| {
                let mut scores = vec![0.0; n_class];
                for (weight, h) in ensemble.iter() {
                    strategy.accumulate(
                        &mut scores[..], h, weight, sample, row
                    );
                }
                scores.iter_mut().for_each(|s| *s /= total);
                scores
            })
            .collect::<Vec<_>>();

        Ok(scores)
    }


    /// The class-probability estimates of each row of `sample`.
    /// Each row has one column per class, ordered as `self.classes()`,
    /// and sums to 1.
    pub fn predict_proba(&self, sample: &Sample)
        -> Result<Vec<Vec<f64>>, BoostError>
    {
        let n_class = self.classes.len();
        let mut scores = self.decision_function(sample)?;

        scores.par_iter_mut()
            .for_each(|row| {
                row.iter_mut()
                    .for_each(|s| *s /= (n_class - 1) as f64);
                utils::softmax(&mut row[..]);
            });

        Ok(scores)
    }


    /// Predicts one label per row of `sample`.
    pub fn predict(&self, sample: &Sample) -> Result<Vec<i64>, BoostError> {
        let scores = self.decision_function(sample)?;

        let labels = scores.into_iter()
            .map(|row| self.classes[utils::argmax(&row[..])])
            .collect::<Vec<_>>();

        Ok(labels)
    }


    /// The fraction of correctly predicted labels on `sample`.
    pub fn score(&self, sample: &Sample) -> Result<f64, BoostError> {
        checker::check_sample(sample)?;

        let n_sample = sample.shape().0 as f64;
        let predictions = self.predict(sample)?;

        let n_correct = predictions.iter()
            .zip(sample.target())
            .filter(|(p, y)| **p == **y as i64)
            .count() as f64;

        Ok(n_correct / n_sample)
    }


    fn print_round(&self, round: usize, weight: f64, size: usize) {
        if !self.verbose {
            return;
        }
        println!(
            "{}    {}    {}",
            format!("  [round {: >5}]", round + 1).bold().red(),
            format!("[weight {: >9.4}]", weight).bold().green(),
            format!("[ensemble {: >5}]", size).bold().yellow(),
        );
    }
}


impl Default for AdaBoostClassifier {
    fn default() -> Self {
        Self::new()
    }
}


/// Derive the seed of the given `round` from the ensemble's base
/// random state.
/// This is the SplitMix64 finalizer.
/// It is a bijection on `u64`, so within one boosting run
/// every round gets a pairwise-distinct seed.
pub(crate) fn derive_seed(base: u64, round: usize) -> u64 {
    let gamma = 0x9E37_79B9_7F4A_7C15_u64;
    let mut z = base.wrapping_add(
        (round as u64).wrapping_add(1).wrapping_mul(gamma)
    );
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}


/// Weight-average the per-tree importances,
/// renormalized to sum to 1 when any tree made a split.
fn aggregate_importances(
    ensemble: &WeightedMajority<DecisionTreeClassifier>,
    n_feature: usize,
) -> Vec<f64>
{
    let total = ensemble.total_weight();
    let mut importances = vec![0.0; n_feature];

    for (weight, h) in ensemble.iter() {
        importances.iter_mut()
            .zip(h.feature_importances(n_feature))
            .for_each(|(acc, imp)| *acc += weight * imp / total);
    }

    let z = importances.iter().sum::<f64>();
    if z > 0.0 {
        importances.iter_mut().for_each(|imp| *imp /= z);
    }
    importances
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_seeds_are_pairwise_distinct() {
        let mut seeds = (0..1000).map(|round| derive_seed(0, round))
            .collect::<Vec<_>>();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 1000);
    }

    #[test]
    fn derived_seeds_depend_on_the_base_state() {
        assert_ne!(derive_seed(0, 0), derive_seed(1, 0));
    }
}
