use super::decision_tree_algorithm::DecisionTree;


/// A struct that builds [`DecisionTree`].
///
/// # Example
/// ```
/// use sammeboost::prelude::*;
///
/// // A decision stump learner for a 3-class problem.
/// let tree = DecisionTreeBuilder::new(3)
///     .max_depth(1)
///     .build();
/// ```
pub struct DecisionTreeBuilder {
    n_classes: usize,
    max_depth: usize,
}


impl DecisionTreeBuilder {
    /// Construct a new builder for a problem with `n_classes` classes.
    /// The default maximal depth is `1`, a decision stump.
    #[inline]
    pub fn new(n_classes: usize) -> Self {
        Self { n_classes, max_depth: 1, }
    }


    /// Set the maximal depth of the produced trees.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "the tree depth must be positive");
        self.max_depth = depth;
        self
    }


    /// Build a [`DecisionTree`] weak learner.
    #[inline]
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.n_classes, self.max_depth)
    }
}
