//! This file provides some common functions
//! such as distribution normalization and the stable softmax.
use rayon::prelude::*;


/// Normalize `items` so that `\| items \|_1 = 1`.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    assert_ne!(z, 0.0);

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}


/// Returns the position of the largest value in `items`.
/// Ties are broken by the smallest index
/// so that predictions are deterministic.
#[inline(always)]
pub(crate) fn argmax(items: &[f64]) -> usize {
    let mut best = 0;
    for (i, &it) in items.iter().enumerate().skip(1) {
        if it > items[best] {
            best = i;
        }
    }
    best
}


/// Overwrite `row` with its softmax.
/// The maximum is subtracted before exponentiation
/// to avoid overflow for large scores.
#[inline(always)]
pub(crate) fn softmax(row: &mut [f64]) {
    let max = row.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let mut z = 0.0;
    for r in row.iter_mut() {
        *r = (*r - max).exp();
        z += *r;
    }

    for r in row.iter_mut() {
        *r /= z;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_rows_sum_to_one() {
        let mut row = [1.0, 2.0, 3.0];
        softmax(&mut row);
        let sum = row.iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(row[2] > row[1] && row[1] > row[0]);
    }

    #[test]
    fn softmax_is_stable_for_large_scores() {
        let mut row = [1e3, 1e3 + 1.0];
        softmax(&mut row);
        assert!(row.iter().all(|p| p.is_finite()));
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn argmax_breaks_ties_by_lowest_index() {
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), 0);
        assert_eq!(argmax(&[0.1, 0.5, 0.5]), 1);
    }

    #[test]
    fn normalize_scales_to_unit_mass() {
        let mut items = [1.0, 3.0];
        normalize(&mut items);
        assert_eq!(items, [0.25, 0.75]);
    }
}
