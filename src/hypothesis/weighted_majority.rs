use serde::{Serialize, Deserialize};

use crate::common::utils;


/// A struct that the boosting loop builds round by round.
/// Holds one `(weight, hypothesis)` pair per accepted weak learner.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority`.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Append a pair `(weight, H)` to the current ensemble.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses in the ensemble.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns the sum of the hypothesis weights.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum::<f64>()
    }


    /// Returns an iterator over `(weight, hypothesis)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Normalize `self.weights`, `\| w \|_1 = 1`.
    #[inline]
    pub fn normalize(&mut self) {
        utils::normalize(&mut self.weights);
    }


    /// Decompose the ensemble
    /// into the two vectors `Vec<f64>` and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}
