use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::Sample;
use crate::error::BoostError;

use std::collections::HashSet;


/// A struct that generates a synthetic classification sample.
///
/// Each class gets its own Gaussian cluster with unit variance,
/// centered on a distinct vertex of the
/// `{-class_sep, +class_sep}^n_features` hypercube.
/// The `class_weights` parameter skews the label frequencies,
/// which makes the generated sample class-imbalanced.
///
/// # Example
/// ```
/// use sammeboost::prelude::*;
///
/// let sample = SyntheticClassification::new()
///     .n_samples(1000)
///     .n_features(3)
///     .n_classes(3)
///     .class_weights(&[0.01, 0.05, 0.94])
///     .class_sep(0.8)
///     .seed(0)
///     .build()
///     .unwrap();
///
/// assert_eq!(sample.shape(), (1000, 3));
/// assert_eq!(sample.classes(), vec![0, 1, 2]);
/// ```
pub struct SyntheticClassification {
    n_samples: usize,
    n_features: usize,
    n_classes: usize,
    class_weights: Option<Vec<f64>>,
    class_sep: f64,
    seed: u64,
}


impl SyntheticClassification {
    /// Construct a generator with the default configuration:
    /// 100 examples, 2 features, 2 balanced classes,
    /// class separation `1.0`.
    pub fn new() -> Self {
        Self {
            n_samples: 100,
            n_features: 2,
            n_classes: 2,
            class_weights: None,
            class_sep: 1.0,
            seed: 1234,
        }
    }


    /// Set the number of examples.
    /// Default value is `100`.
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }


    /// Set the number of features.
    /// Default value is `2`.
    pub fn n_features(mut self, n_features: usize) -> Self {
        self.n_features = n_features;
        self
    }


    /// Set the number of classes.
    /// Default value is `2`.
    pub fn n_classes(mut self, n_classes: usize) -> Self {
        self.n_classes = n_classes;
        self
    }


    /// Set the label frequencies, one entry per class.
    /// The entries are normalized to sum to 1.
    /// By default every class gets the same frequency.
    pub fn class_weights(mut self, weights: &[f64]) -> Self {
        self.class_weights = Some(weights.to_vec());
        self
    }


    /// Set the half-distance between cluster centers.
    /// Smaller values make the problem harder.
    /// Default value is `1.0`.
    pub fn class_sep(mut self, class_sep: f64) -> Self {
        self.class_sep = class_sep;
        self
    }


    /// Set the seed of the generator.
    /// Default value is `1234`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Generate the sample.
    /// Labels are the integers `0..n_classes`.
    pub fn build(&self) -> Result<Sample, BoostError> {
        self.check()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let centroids = self.centroids(&mut rng);
        let counts = self.class_counts()?;

        let mut rows = Vec::with_capacity(self.n_samples);
        let mut target = Vec::with_capacity(self.n_samples);
        for (label, (count, centroid)) in
            counts.into_iter().zip(centroids).enumerate()
        {
            for _ in 0..count {
                let row = centroid.iter()
                    .map(|c| {
                        let noise: f64 = rng.sample(StandardNormal);
                        c + noise
                    })
                    .collect::<Vec<_>>();
                rows.push(row);
                target.push(label as f64);
            }
        }

        // Shuffle so that the class blocks are interleaved.
        let mut ix = (0..self.n_samples).collect::<Vec<_>>();
        ix.shuffle(&mut rng);
        let rows = ix.iter().map(|&i| rows[i].clone()).collect::<Vec<_>>();
        let target = ix.iter().map(|&i| target[i]).collect::<Vec<_>>();

        Sample::from_rows(rows, target)
    }


    fn check(&self) -> Result<(), BoostError> {
        if self.n_samples == 0 || self.n_features == 0 {
            return Err(BoostError::InvalidParameter(
                "`n_samples` and `n_features` must be positive".into()
            ));
        }

        if self.n_features > 63 {
            return Err(BoostError::InvalidParameter(
                "`n_features` must be at most 63".into()
            ));
        }

        if self.n_classes < 2 {
            return Err(BoostError::InvalidParameter(
                "`n_classes` must be at least 2".into()
            ));
        }

        // One distinct hypercube vertex per class.
        if (self.n_classes as u128) > (1_u128 << self.n_features) {
            return Err(BoostError::InvalidParameter(
                format!(
                    "{} features admit at most {} classes",
                    self.n_features,
                    1_u128 << self.n_features,
                )
            ));
        }

        Ok(())
    }


    /// Pick a distinct `±class_sep` vertex for each class.
    fn centroids<R: Rng>(&self, rng: &mut R) -> Vec<Vec<f64>> {
        let mut used = HashSet::new();
        let mut centroids = Vec::with_capacity(self.n_classes);

        while centroids.len() < self.n_classes {
            let vertex = rng.gen_range(0_u64..(1_u64 << self.n_features));
            if !used.insert(vertex) {
                continue;
            }

            let centroid = (0..self.n_features)
                .map(|j| {
                    if vertex >> j & 1 == 1 {
                        self.class_sep
                    } else {
                        -self.class_sep
                    }
                })
                .collect::<Vec<_>>();
            centroids.push(centroid);
        }

        centroids
    }


    /// Number of examples per class.
    /// The rounding remainder goes to the last class.
    fn class_counts(&self) -> Result<Vec<usize>, BoostError> {
        let weights = match &self.class_weights {
            Some(weights) => {
                if weights.len() != self.n_classes {
                    return Err(BoostError::InvalidParameter(
                        format!(
                            "`class_weights` has {} entries, expected {}",
                            weights.len(),
                            self.n_classes,
                        )
                    ));
                }
                if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                    return Err(BoostError::InvalidParameter(
                        "`class_weights` entries must be positive".into()
                    ));
                }
                weights.clone()
            },
            None => vec![1.0; self.n_classes],
        };

        let z = weights.iter().sum::<f64>();
        let mut counts = weights.iter()
            .map(|w| (w / z * self.n_samples as f64) as usize)
            .collect::<Vec<_>>();

        let assigned = counts.iter().take(self.n_classes - 1).sum::<usize>();
        counts[self.n_classes - 1] = self.n_samples - assigned;

        Ok(counts)
    }
}


impl Default for SyntheticClassification {
    fn default() -> Self {
        Self::new()
    }
}
