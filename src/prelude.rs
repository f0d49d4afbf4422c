//! Exports the classifier, the weak learners, and the evaluation tools.
//!
pub use crate::booster::{
    AdaBoostClassifier,
    Algorithm,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,


    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Feature,
    Sample,
};


pub use crate::research::{
    StratifiedSplit,
    SyntheticClassification,
};


pub use crate::error::BoostError;
