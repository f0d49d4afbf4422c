//! Common functions used by the booster and the weak learners.

pub(crate) mod checker;
pub(crate) mod utils;
