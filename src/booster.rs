//! The files in `booster/` directory define
//! the multiclass AdaBoost classifier.

/// Defines the AdaBoost classifier and its boosting strategies.
pub mod adaboost;

pub use adaboost::{AdaBoostClassifier, Algorithm};
