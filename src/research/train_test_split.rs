use colored::Colorize;
use rand::prelude::*;

use crate::Sample;

use std::collections::BTreeMap;

const WIDTH: usize = 9;


/// A struct that generates a disjoint train/test pair
/// preserving the label proportions of the given sample.
///
/// # Example
/// ```
/// use sammeboost::prelude::*;
///
/// let sample = SyntheticClassification::new()
///     .n_samples(400)
///     .seed(0)
///     .build()
///     .unwrap();
///
/// let (train, test) = StratifiedSplit::new(&sample)
///     .train_ratio(0.75)
///     .seed(1)
///     .split();
///
/// assert_eq!(train.shape().0 + test.shape().0, 400);
/// ```
pub struct StratifiedSplit<'a> {
    sample: &'a Sample,
    train_ratio: f64,
    seed: u64,
    verbose: bool,
}


impl<'a> StratifiedSplit<'a> {
    /// Construct a new instance of `StratifiedSplit`.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            train_ratio: 0.75,
            seed: 1234,
            verbose: false,
        }
    }


    /// Set the ratio of the training sample.
    /// Default value is `0.75`.
    #[inline]
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        assert!(
            0f64 < ratio && ratio < 1f64,
            "Training ratio should be in `(0, 1)`."
        );
        self.train_ratio = ratio;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `StratifiedSplit` prints a summary line
    /// when generating the train/test pair.
    /// Default value is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Split the sample into a disjoint `(train, test)` pair.
    /// Each class contributes `train_ratio` of its rows
    /// to the training side,
    /// so both partitions keep the original label proportions.
    #[inline]
    pub fn split(&self) -> (Sample, Sample) {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut by_class: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, y) in self.sample.target().iter().enumerate() {
            by_class.entry(*y as i64).or_default().push(i);
        }

        let mut train_ix = Vec::new();
        let mut test_ix = Vec::new();
        for mut ix in by_class.into_values() {
            ix.shuffle(&mut rng);

            let n = ix.len();
            let mut n_train =
                (self.train_ratio * n as f64).round() as usize;
            // Keep both sides non-empty whenever the class allows it.
            if n >= 2 {
                n_train = n_train.clamp(1, n - 1);
            }

            train_ix.extend_from_slice(&ix[..n_train]);
            test_ix.extend_from_slice(&ix[n_train..]);
        }

        train_ix.sort_unstable();
        test_ix.sort_unstable();

        if self.verbose {
            println!(
                "{}    {}",
                format!("[TRAIN {: >WIDTH$}]", train_ix.len())
                    .bold().green(),
                format!("[TEST {: >WIDTH$}]", test_ix.len())
                    .bold().yellow(),
            );
        }

        (self.sample.select(&train_ix[..]), self.sample.select(&test_ix[..]))
    }
}
