//! Provides the multiclass AdaBoost classifier
//! with the SAMME / SAMME.R boosting strategies.

mod adaboost_algorithm;
mod strategy;

pub use adaboost_algorithm::AdaBoostClassifier;
pub use strategy::Algorithm;
