//! The two boosting strategies sharing the AdaBoost loop skeleton:
//! discrete (SAMME) and real-valued (SAMME.R) voting.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::error::BoostError;
use crate::hypothesis::Classifier;
use crate::weak_learner::DecisionTreeClassifier;

use std::fmt;
use std::str::FromStr;


/// The boosting variant run by
/// [`AdaBoostClassifier`](super::AdaBoostClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Discrete boosting.
    /// Weak learners contribute label-only votes,
    /// weighted by their accuracy.
    Samme,
    /// Real-valued boosting.
    /// Weak learners contribute class-probability estimates.
    SammeR,
}


impl Algorithm {
    /// The strategy implementing this variant.
    pub(crate) fn strategy(self) -> &'static dyn BoostStrategy {
        match self {
            Self::Samme => &DiscreteVote,
            Self::SammeR => &RealVote,
        }
    }
}


impl FromStr for Algorithm {
    type Err = BoostError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "SAMME" => Ok(Self::Samme),
            "SAMME.R" => Ok(Self::SammeR),
            other => Err(BoostError::InvalidParameter(
                format!("unknown algorithm `{other}`")
            )),
        }
    }
}


impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Samme => write!(f, "SAMME"),
            Self::SammeR => write!(f, "SAMME.R"),
        }
    }
}


/// The outcome of one boosting round.
pub(crate) enum Round {
    /// Accept the hypothesis with the given weight and keep boosting.
    Accept(f64),
    /// Accept the hypothesis with the given weight and stop;
    /// it made no error on the current distribution.
    AcceptAndStop(f64),
    /// Discard the hypothesis and stop;
    /// it was no better than random guessing.
    Stop,
}


/// One of the two voting strategies of the SAMME family.
/// `round` evaluates a freshly produced weak learner and
/// reweights the training distribution,
/// `accumulate` folds a fitted learner into the decision function.
pub(crate) trait BoostStrategy: Sync {
    /// Evaluate `h` under `dist` and reweight `dist` in place.
    /// The caller renormalizes `dist` afterwards
    /// (and stops on weight underflow).
    fn round(
        &self,
        sample: &Sample,
        dist: &mut [f64],
        h: &DecisionTreeClassifier,
        learning_rate: f64,
    ) -> Round;


    /// Add the contribution of `h`, scaled by `weight`,
    /// to the per-class `scores` of the `row`-th example.
    fn accumulate(
        &self,
        scores: &mut [f64],
        h: &DecisionTreeClassifier,
        weight: f64,
        sample: &Sample,
        row: usize,
    );
}


/// Discrete (SAMME) voting.
pub(crate) struct DiscreteVote;

/// Real-valued (SAMME.R) voting.
pub(crate) struct RealVote;


impl BoostStrategy for DiscreteVote {
    fn round(
        &self,
        sample: &Sample,
        dist: &mut [f64],
        h: &DecisionTreeClassifier,
        learning_rate: f64,
    ) -> Round
    {
        let k = h.n_classes() as f64;
        let target = sample.target();
        let preds = h.predict_all(sample);

        let eps = preds.iter()
            .zip(target)
            .zip(dist.iter())
            .map(|((&p, &y), d)| if p != y as usize { *d } else { 0.0 })
            .sum::<f64>();

        if eps <= 0.0 {
            return Round::AcceptAndStop(1.0);
        }

        // A learner at or below chance level for `k` classes
        // cannot contribute a positive weight.
        if eps >= 1.0 - 1.0 / k {
            return Round::Stop;
        }

        let alpha = learning_rate
            * (((1.0 - eps) / eps).ln() + (k - 1.0).ln());

        // Upweight the misclassified examples.
        let scale = alpha.exp();
        dist.par_iter_mut()
            .enumerate()
            .for_each(|(i, d)| {
                if preds[i] != target[i] as usize {
                    *d *= scale;
                }
            });

        Round::Accept(alpha)
    }


    fn accumulate(
        &self,
        scores: &mut [f64],
        h: &DecisionTreeClassifier,
        weight: f64,
        sample: &Sample,
        row: usize,
    )
    {
        scores[h.predict(sample, row)] += weight;
    }
}


impl BoostStrategy for RealVote {
    fn round(
        &self,
        sample: &Sample,
        dist: &mut [f64],
        h: &DecisionTreeClassifier,
        learning_rate: f64,
    ) -> Round
    {
        let k = h.n_classes() as f64;
        let target = sample.target();
        let probas = h.proba_all(sample);

        let eps = probas.iter()
            .zip(target)
            .zip(dist.iter())
            .map(|((p, &y), d)| {
                let pred = crate::common::utils::argmax(&p[..]);
                if pred != y as usize { *d } else { 0.0 }
            })
            .sum::<f64>();

        if eps <= 0.0 {
            return Round::AcceptAndStop(1.0);
        }

        // The SAMME.R update
        //     d_i <- d_i * exp(- lr * (k-1)/k * y_i . log p_i)
        // where `y_i` is the coding vector taking `1` at the true class
        // and `-1/(k-1)` elsewhere.
        let coef = learning_rate * (k - 1.0) / k;
        dist.par_iter_mut()
            .enumerate()
            .for_each(|(i, d)| {
                let y = target[i] as usize;
                let inner = probas[i].iter()
                    .enumerate()
                    .map(|(m, pm)| {
                        let logp = pm.max(f64::EPSILON).ln();
                        let code = if m == y {
                            1.0
                        } else {
                            -1.0 / (k - 1.0)
                        };
                        code * logp
                    })
                    .sum::<f64>();
                *d *= (-coef * inner).exp();
            });

        Round::Accept(1.0)
    }


    fn accumulate(
        &self,
        scores: &mut [f64],
        h: &DecisionTreeClassifier,
        weight: f64,
        sample: &Sample,
        row: usize,
    )
    {
        let k = h.n_classes() as f64;
        let proba = h.proba(sample, row);
        let logs = proba.iter()
            .map(|p| p.max(f64::EPSILON).ln())
            .collect::<Vec<_>>();
        let mean = logs.iter().sum::<f64>() / k;

        scores.iter_mut()
            .zip(logs)
            .for_each(|(s, logp)| {
                *s += weight * (k - 1.0) * (logp - mean);
            });
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::{DecisionTreeBuilder, WeakLearner};

    fn fit_stump(sample: &Sample) -> DecisionTreeClassifier {
        let n_sample = sample.shape().0;
        let dist = vec![1.0 / n_sample as f64; n_sample];
        DecisionTreeBuilder::new(2)
            .build()
            .produce(sample, &dist, 0)
    }

    #[test]
    fn parses_the_sklearn_spellings() {
        assert_eq!("SAMME".parse::<Algorithm>().unwrap(), Algorithm::Samme);
        assert_eq!("SAMME.R".parse::<Algorithm>().unwrap(), Algorithm::SammeR);
        assert!("samme".parse::<Algorithm>().is_err());
    }

    #[test]
    fn perfect_learner_stops_the_discrete_round() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let target = vec![0.0, 0.0, 1.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();
        let h = fit_stump(&sample);

        let mut dist = vec![0.25; 4];
        let round = DiscreteVote.round(&sample, &mut dist, &h, 1.0);
        assert!(matches!(round, Round::AcceptAndStop(w) if w == 1.0));
    }

    #[test]
    fn chance_level_learner_is_discarded() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(
            rows.clone(), vec![0.0, 0.0, 1.0, 1.0]
        ).unwrap();
        let h = fit_stump(&sample);

        // Same features, labels flipped: `h` is always wrong.
        let flipped = Sample::from_rows(
            rows, vec![1.0, 1.0, 0.0, 0.0]
        ).unwrap();

        let mut dist = vec![0.25; 4];
        let round = DiscreteVote.round(&flipped, &mut dist, &h, 1.0);
        assert!(matches!(round, Round::Stop));
    }

    #[test]
    fn discrete_round_upweights_the_misclassified() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        // One dirty label; a stump misclassifies exactly one row.
        let target = vec![0.0, 0.0, 0.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();
        let h = fit_stump(&sample);

        let mut dist = vec![0.25; 4];
        let round = DiscreteVote.round(&sample, &mut dist, &h, 1.0);
        match round {
            Round::Accept(alpha) => assert!(alpha > 0.0),
            Round::AcceptAndStop(_) => {},
            Round::Stop => panic!("a nearly-clean stump must be accepted"),
        }
    }

    #[test]
    fn real_round_keeps_weights_positive() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let target = vec![0.0, 1.0, 0.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();
        let h = fit_stump(&sample);

        let mut dist = vec![0.25; 4];
        let _ = RealVote.round(&sample, &mut dist, &h, 1.0);
        assert!(dist.iter().all(|d| *d > 0.0 && d.is_finite()));
    }
}
