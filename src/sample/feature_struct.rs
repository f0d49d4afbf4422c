use serde::{Serialize, Deserialize};
use std::ops::Index;
use std::slice::Iter;


/// Dense representation of a single feature column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name.
    name: String,
    /// Feature values, one per example.
    values: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature of the given name.
    pub fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), values: Vec::new(), }
    }


    /// Construct a feature from a name and a value vector.
    pub fn from_values<T: ToString>(name: T, values: Vec<f64>) -> Self {
        Self { name: name.to_string(), values, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of examples in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this feature has no examples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns an iterator over the feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.values.push(x);
    }


    /// Collect the rows in `ix` into a new feature of the same name.
    pub(crate) fn select(&self, ix: &[usize]) -> Self {
        let values = ix.iter()
            .map(|&i| self.values[i])
            .collect::<Vec<_>>();
        Self { name: self.name.clone(), values, }
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.values
    }
}


impl Index<usize> for Feature {
    type Output = f64;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}
