//! The files in `hypothesis/` directory define
//! the multiclass classifier trait and the weighted ensemble.

mod hypothesis_traits;
mod weighted_majority;

pub use hypothesis_traits::Classifier;
pub use weighted_majority::WeightedMajority;
