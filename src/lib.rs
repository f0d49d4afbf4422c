#![warn(missing_docs)]

//!
//! A crate that provides a multiclass AdaBoost classifier.
//!
//! The boosting loop follows the SAMME family of algorithms:
//!
//! - `SAMME`
//!     Discrete boosting.
//!     Each weak learner contributes a label-only vote and
//!     its weight grows with its accuracy
//!     on the current distribution over training examples.
//!
//! - `SAMME.R`
//!     Real-valued boosting.
//!     Each weak learner contributes class-probability estimates
//!     instead of a hard vote,
//!     which typically shrinks the training error faster.
//!
//! Weak learners are shallow decision trees (decision stumps by default).
//! Every learner is seeded with a distinct value
//! derived from the ensemble's base random state,
//! so a fitted ensemble is reproducible
//! and its learners are diverse at the same time.

pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod error;

pub(crate) mod common;

pub mod prelude;

pub use sample::{Feature, Sample};

pub use hypothesis::{Classifier, WeightedMajority};

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};

pub use booster::{AdaBoostClassifier, Algorithm};

pub use research::{StratifiedSplit, SyntheticClassification};

pub use error::BoostError;
