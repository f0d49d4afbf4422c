use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;
use std::path::Path;

use crate::error::BoostError;
use super::feature_struct::Feature;


/// Struct `Sample` holds a batch sample in a dense, column-major format.
///
/// A sample owns one [`Feature`] per column and a target vector
/// holding integer class labels (stored as `f64`).
/// Samples are read-only during fitting;
/// the classifier never mutates a caller's sample.
#[derive(Debug, Clone)]
pub struct Sample {
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    target: Vec<f64>,
    n_sample: usize,
    n_feature: usize,
}


impl Sample {
    /// Construct a sample from row-major feature vectors
    /// and a target vector.
    /// Columns get the dummy names `Feat. [1]`, `Feat. [2]`, ...
    ///
    /// Fails with [`BoostError::ShapeMismatch`] when `rows` and `target`
    /// have different lengths,
    /// and with [`BoostError::InvalidParameter`] when the rows
    /// do not share a common width.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<f64>)
        -> Result<Self, BoostError>
    {
        let n_sample = rows.len();
        let n_target = target.len();
        if n_sample != n_target {
            return Err(BoostError::ShapeMismatch { n_sample, n_target });
        }

        let n_feature = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != n_feature) {
            return Err(BoostError::InvalidParameter(
                "all rows must have the same number of features".into()
            ));
        }

        let mut features = (1..=n_feature).map(|i| {
                let name = format!("Feat. [{i}]");
                Feature::new(name)
            })
            .collect::<Vec<_>>();

        for row in rows {
            for (feat, x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        let name_to_index = index_by_name(&features);

        Ok(Self { name_to_index, features, target, n_sample, n_feature, })
    }


    /// Read a CSV format file to `Sample` type.
    /// The target column is empty until [`Sample::set_target`] is called.
    pub fn from_csv<P>(file: P, mut has_header: bool)
        -> Result<Self, BoostError>
        where P: AsRef<Path>,
    {
        let path = file.as_ref().to_path_buf();
        let file = File::open(&path)
            .map_err(|source| BoostError::Read {
                path: path.clone(), source,
            })?;
        let mut lines = BufReader::new(file).lines().enumerate();

        let mut features = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                let line = line.map_err(|source| BoostError::Read {
                    path: path.clone(), source,
                })?;
                features = line.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for (lineno, line) in lines {
            let line = line.map_err(|source| BoostError::Read {
                path: path.clone(), source,
            })?;

            let xs = line.split(',')
                .map(|x| x.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| BoostError::Parse {
                    path: path.clone(), line: lineno + 1,
                })?;

            // If the header does not exist, construct a dummy one.
            if !has_header {
                features = (1..=xs.len()).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::new(name)
                    })
                    .collect::<Vec<_>>();
                has_header = true;
            }

            if xs.len() != features.len() {
                return Err(BoostError::Parse {
                    path: path.clone(), line: lineno + 1,
                });
            }

            for (feat, x) in features.iter_mut().zip(xs) {
                feat.append(x);
            }
            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);
        let name_to_index = index_by_name(&features);

        Ok(Self { name_to_index, features, target, n_sample, n_feature, })
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .expect("The target class does not exist");

        let target = self.features.remove(pos).into_target();
        self.target = target;
        self.n_feature -= 1;

        self.name_to_index = index_by_name(&self.features);

        self
    }


    /// Returns the target values as a slice.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the sorted distinct class labels of this sample.
    pub fn classes(&self) -> Vec<i64> {
        let mut classes = self.target.iter()
            .map(|y| *y as i64)
            .collect::<Vec<_>>();
        classes.sort_unstable();
        classes.dedup();
        classes
    }


    /// Collect the rows in `ix` into a new sample.
    /// Used by the stratified splitter to build
    /// disjoint train/test partitions.
    pub fn select(&self, ix: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.select(ix))
            .collect::<Vec<_>>();
        let target = ix.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: ix.len(),
            n_feature: self.n_feature,
        }
    }


    /// Returns a sample sharing the features of `self`
    /// with a replaced target vector.
    /// The booster uses this to fit weak learners
    /// on class codes instead of raw labels.
    pub(crate) fn with_target(&self, target: Vec<f64>) -> Self {
        let mut sample = self.clone();
        sample.target = target;
        sample
    }
}


fn index_by_name(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect::<HashMap<_, _>>()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}
