//! The files in `weak_learner/` directory define
//! the `WeakLearner` trait and the decision tree weak learner.

/// Provides the `WeakLearner` trait.
pub mod core;

/// Defines the decision tree weak learner.
pub mod decision_tree;

pub use self::core::WeakLearner;

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};
