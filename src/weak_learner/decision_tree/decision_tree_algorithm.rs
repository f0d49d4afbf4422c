use rand::prelude::*;
use rayon::prelude::*;

use crate::{Sample, WeakLearner};
use super::decision_tree_classifier::DecisionTreeClassifier;
use super::Node;

use std::fmt;


/// Two splits whose gains differ by less than this value are
/// treated as ties and resolved with the round's seeded RNG.
const GAIN_TOLERANCE: f64 = 1e-12;


/// The decision tree weak learner.
/// Given a training sample and a distribution over it,
/// [`DecisionTree`] produces a [`DecisionTreeClassifier`]
/// by recursively choosing the split that maximizes
/// the weighted Gini impurity decrease.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use sammeboost::prelude::*;
///
/// let rows = vec![
///     vec![0.0], vec![1.0], vec![2.0], vec![3.0],
/// ];
/// // Class codes, not raw labels.
/// let target = vec![0.0, 0.0, 1.0, 1.0];
/// let sample = Sample::from_rows(rows, target).unwrap();
///
/// let tree = DecisionTreeBuilder::new(2)
///     .max_depth(1)
///     .build();
///
/// let n_sample = sample.shape().0;
/// let dist = vec![1.0 / n_sample as f64; n_sample];
/// let f = tree.produce(&sample, &dist, 0);
///
/// assert_eq!(f.predict_all(&sample), vec![0, 0, 1, 1]);
/// ```
pub struct DecisionTree {
    n_classes: usize,
    max_depth: usize,
}


/// The best split found on a single feature.
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    gain: f64,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(n_classes: usize, max_depth: usize)
        -> Self
    {
        Self { n_classes, max_depth, }
    }


    /// Distribution mass per class code over the rows in `indices`.
    fn class_masses(&self, sample: &Sample, dist: &[f64], indices: &[usize])
        -> Vec<f64>
    {
        let target = sample.target();
        let mut masses = vec![0.0; self.n_classes];
        for &i in indices {
            let code = target[i] as usize;
            debug_assert!(code < self.n_classes);
            masses[code] += dist[i];
        }
        masses
    }


    /// Grow a tree of depth at most `depth` over the rows in `indices`.
    /// Every row in `indices` carries positive mass.
    fn grow<R: Rng>(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: Vec<usize>,
        depth: usize,
        rng: &mut R,
    ) -> Node
    {
        let masses = self.class_masses(sample, dist, &indices[..]);
        let total = masses.iter().sum::<f64>();

        let distribution = masses.iter()
            .map(|m| m / total)
            .collect::<Vec<_>>();

        let impurity = gini(&masses[..], total);
        if depth == 0 || impurity <= 0.0 {
            return Node::Leaf { distribution };
        }

        // Find the best split of each feature in parallel.
        let n_feature = sample.shape().1;
        let candidates = (0..n_feature).into_par_iter()
            .filter_map(|feature| {
                self.best_split_on(sample, dist, &indices[..], feature)
            })
            .collect::<Vec<_>>();

        let best_gain = candidates.iter()
            .map(|c| c.gain)
            .fold(f64::NEG_INFINITY, f64::max);
        if candidates.is_empty() || best_gain <= GAIN_TOLERANCE {
            return Node::Leaf { distribution };
        }

        // Equal-gain splits are resolved with the round's RNG,
        // so learners with different seeds can diverge.
        let tied = candidates.iter()
            .filter(|c| c.gain >= best_gain - GAIN_TOLERANCE)
            .collect::<Vec<_>>();
        let chosen = tied[rng.gen_range(0..tied.len())];


        // Split the rows for the left/right children.
        let feature = &sample.features()[chosen.feature];
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            if feature[i] <= chosen.threshold {
                lindices.push(i);
            } else {
                rindices.push(i);
            }
        }

        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Node::Leaf { distribution };
        }

        let depth = depth - 1;
        let left = self.grow(sample, dist, lindices, depth, rng);
        let right = self.grow(sample, dist, rindices, depth, rng);

        Node::Branch {
            feature: chosen.feature,
            threshold: chosen.threshold,
            gain: chosen.gain,
            left: Box::new(left),
            right: Box::new(right),
        }
    }


    /// Sweep the thresholds of `feature` over the rows in `indices`
    /// and return the one maximizing the impurity decrease.
    /// Returns `None` when the feature takes a single value.
    fn best_split_on(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: &[usize],
        feature: usize,
    ) -> Option<SplitCandidate>
    {
        let column = &sample.features()[feature];
        let target = sample.target();

        let mut items = indices.iter()
            .map(|&i| (column[i], i))
            .collect::<Vec<_>>();
        items.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());

        let total_masses = self.class_masses(sample, dist, indices);
        let total = total_masses.iter().sum::<f64>();
        let parent_score = total * gini(&total_masses[..], total);

        let mut left_masses = vec![0.0; self.n_classes];
        let mut left_total = 0.0;

        let mut best: Option<SplitCandidate> = None;

        for window in items.windows(2) {
            let (value, i) = window[0];
            let (next_value, _) = window[1];

            let code = target[i] as usize;
            left_masses[code] += dist[i];
            left_total += dist[i];

            if value == next_value {
                continue;
            }

            let right_masses = total_masses.iter()
                .zip(&left_masses[..])
                .map(|(t, l)| t - l)
                .collect::<Vec<_>>();
            let right_total = total - left_total;

            let children_score =
                left_total * gini(&left_masses[..], left_total)
                + right_total * gini(&right_masses[..], right_total);
            let gain = parent_score - children_score;

            if best.as_ref().map_or(true, |b| gain > b.gain) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: value + (next_value - value) / 2.0,
                    gain,
                });
            }
        }

        best
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn produce(&self, sample: &Sample, dist: &[f64], seed: u64)
        -> Self::Hypothesis
    {
        let n_sample = sample.shape().0;

        let indices = (0..n_sample).filter(|&i| dist[i] > 0.0)
            .collect::<Vec<usize>>();
        assert_ne!(indices.len(), 0);

        let mut rng = StdRng::seed_from_u64(seed);
        let root = self.grow(sample, dist, indices, self.max_depth, &mut rng);

        DecisionTreeClassifier::from_components(root, self.n_classes, seed)
    }
}


/// The Gini impurity of the class masses `masses` with total mass `total`.
#[inline]
fn gini(masses: &[f64], total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    1.0 - masses.iter()
        .map(|m| (m / total).powi(2))
        .sum::<f64>()
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Weak Learner\n\n\
            - Max depth: {}\n\
            - # of classes: {}\n\
            ----------\
            ",
            self.max_depth,
            self.n_classes,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::super::DecisionTreeBuilder;
    use crate::hypothesis::Classifier;

    fn three_segment_sample() -> Sample {
        let rows = vec![
            vec![0.0], vec![1.0], vec![2.0], vec![3.0],
        ];
        let target = vec![0.0, 0.0, 1.0, 2.0];
        Sample::from_rows(rows, target).unwrap()
    }

    #[test]
    fn stump_separates_a_pure_threshold() {
        let rows = vec![
            vec![-2.0], vec![-1.0], vec![1.0], vec![2.0],
        ];
        let target = vec![0.0, 0.0, 1.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();

        let tree = DecisionTreeBuilder::new(2).build();
        let dist = vec![0.25; 4];
        let f = tree.produce(&sample, &dist, 42);

        assert_eq!(f.predict_all(&sample), vec![0, 0, 1, 1]);
        assert_eq!(f.random_state(), 42);
    }

    #[test]
    fn leaf_probabilities_sum_to_one() {
        let sample = three_segment_sample();
        let tree = DecisionTreeBuilder::new(3).build();
        let dist = vec![0.25; 4];
        let f = tree.produce(&sample, &dist, 0);

        for row in 0..4 {
            let proba = f.proba(&sample, row);
            assert_eq!(proba.len(), 3);
            assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn depth_two_separates_three_segments() {
        let sample = three_segment_sample();
        let tree = DecisionTreeBuilder::new(3)
            .max_depth(2)
            .build();
        let dist = vec![0.25; 4];
        let f = tree.produce(&sample, &dist, 7);

        assert_eq!(f.predict_all(&sample), vec![0, 0, 1, 2]);
    }

    #[test]
    fn importances_have_one_entry_per_feature() {
        // The second feature is constant, so only
        // the first one can gather importance.
        let rows = vec![
            vec![0.0, 5.0],
            vec![1.0, 5.0],
            vec![2.0, 5.0],
            vec![3.0, 5.0],
        ];
        let target = vec![0.0, 0.0, 1.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();

        let tree = DecisionTreeBuilder::new(2).build();
        let dist = vec![0.25; 4];
        let f = tree.produce(&sample, &dist, 0);

        let importances = f.feature_importances(2);
        assert_eq!(importances, vec![1.0, 0.0]);
    }
}
