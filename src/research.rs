//! The files in `research/` directory define the evaluation harness:
//! a synthetic dataset generator and a stratified train/test splitter.

mod synthetic;
mod train_test_split;

pub use synthetic::SyntheticClassification;
pub use train_test_split::StratifiedSplit;
