//! The files in `sample/` directory define the dataset container
//! shared by the booster and the weak learners.

mod feature_struct;
mod sample_struct;

pub use feature_struct::Feature;
pub use sample_struct::Sample;
