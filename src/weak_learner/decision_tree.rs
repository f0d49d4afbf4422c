//! Defines the depth-limited decision tree weak learner
//! and the classifier it produces.

mod builder;
mod decision_tree_algorithm;
mod decision_tree_classifier;

pub use builder::DecisionTreeBuilder;
pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;

pub(crate) use decision_tree_classifier::Node;
