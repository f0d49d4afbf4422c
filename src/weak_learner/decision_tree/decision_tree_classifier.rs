use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::hypothesis::Classifier;


/// A node of a fitted decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) enum Node {
    /// An internal node.
    /// Rows with `x[feature] <= threshold` descend to `left`,
    /// the others to `right`.
    Branch {
        /// Index of the feature this node splits on.
        feature: usize,
        /// Splitting threshold.
        threshold: f64,
        /// Weighted impurity decrease achieved by this split.
        gain: f64,
        /// Left child (`x[feature] <= threshold`).
        left: Box<Node>,
        /// Right child.
        right: Box<Node>,
    },
    /// A leaf node carrying class-probability estimates.
    Leaf {
        /// Distribution over class indices; sums to 1.
        distribution: Vec<f64>,
    },
}


impl Node {
    /// Walk the tree down to the leaf that covers the `row`-th example.
    fn leaf_at<'t>(&'t self, sample: &Sample, row: usize) -> &'t [f64] {
        match self {
            Node::Leaf { distribution } => &distribution[..],
            Node::Branch { feature, threshold, left, right, .. } => {
                let x = sample.features()[*feature][row];
                if x <= *threshold {
                    left.leaf_at(sample, row)
                } else {
                    right.leaf_at(sample, row)
                }
            },
        }
    }


    /// Accumulate the impurity decrease of each split into `importances`.
    fn collect_gain(&self, importances: &mut [f64]) {
        if let Node::Branch { feature, gain, left, right, .. } = self {
            importances[*feature] += gain;
            left.collect_gain(importances);
            right.collect_gain(importances);
        }
    }
}


/// A decision tree classifier fitted on one boosting round.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_classes: usize,
    random_state: u64,
}


impl DecisionTreeClassifier {
    /// Construct a fitted tree. Called only by [`DecisionTree`].
    ///
    /// [`DecisionTree`]: super::DecisionTree
    #[inline]
    pub(crate) fn from_components(
        root: Node,
        n_classes: usize,
        random_state: u64,
    ) -> Self
    {
        Self { root, n_classes, random_state, }
    }


    /// The seed this tree was produced with.
    /// Distinct for every learner within one fitted ensemble.
    pub fn random_state(&self) -> u64 {
        self.random_state
    }


    /// Per-feature impurity decrease of this tree,
    /// normalized to sum to 1 when any split exists.
    /// The returned vector has length `n_feature`.
    pub fn feature_importances(&self, n_feature: usize) -> Vec<f64> {
        let mut importances = vec![0.0; n_feature];
        self.root.collect_gain(&mut importances);

        let z = importances.iter().sum::<f64>();
        if z > 0.0 {
            importances.iter_mut().for_each(|imp| *imp /= z);
        }
        importances
    }
}


impl Classifier for DecisionTreeClassifier {
    fn n_classes(&self) -> usize {
        self.n_classes
    }


    fn proba(&self, sample: &Sample, row: usize) -> Vec<f64> {
        self.root.leaf_at(sample, row).to_vec()
    }
}
