//! Seeded train/test partition of a dataset
//!
//! The rows are permuted with a [`Xoshiro256Plus`] generator seeded from the pipeline settings,
//! so the same seed always yields the same partition on every platform. The size of the test
//! subset is rounded up: `n_test = ceil(test_fraction * n)` and the training subset receives the
//! remaining `n - n_test` rows.

use linfa::prelude::*;
use ndarray::Axis;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;

use crate::error::{Error, Result};

/// Two disjoint subsets of a dataset, together covering all of its rows
pub struct Split {
    pub train: Dataset<f64, usize>,
    pub test: Dataset<f64, usize>,
    /// Row indices into the source dataset, in the order of `train`
    pub train_indices: Vec<usize>,
    /// Row indices into the source dataset, in the order of `test`
    pub test_indices: Vec<usize>,
}

/// Number of rows placed in the test subset for `n` samples
pub fn test_size(n: usize, test_fraction: f64) -> Result<usize> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::Parameters(format!(
            "test fraction should be in (0, 1), but was {}",
            test_fraction
        )));
    }

    let n_test = (test_fraction * n as f64).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::Parameters(format!(
            "test fraction {} of {} samples leaves an empty subset",
            test_fraction, n
        )));
    }

    Ok(n_test)
}

/// Split `dataset` into a training and a testing subset.
///
/// The permutation is drawn from a generator seeded with `seed`; the first `n_test` permuted rows
/// form the test subset, the rest the training subset. Feature names are kept on both subsets.
pub fn train_test_split(
    dataset: &Dataset<f64, usize>,
    test_fraction: f64,
    seed: u64,
) -> Result<Split> {
    let n = dataset.nsamples();
    let n_test = test_size(n, test_fraction)?;

    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    let mut indices = (0..n).collect::<Vec<_>>();
    indices.shuffle(&mut rng);

    let train_indices = indices.split_off(n_test);
    let test_indices = indices;

    debug!(
        train = train_indices.len(),
        test = test_indices.len(),
        seed,
        "partitioned dataset"
    );

    Ok(Split {
        train: select_rows(dataset, &train_indices),
        test: select_rows(dataset, &test_indices),
        train_indices,
        test_indices,
    })
}

fn select_rows(dataset: &Dataset<f64, usize>, indices: &[usize]) -> Dataset<f64, usize> {
    Dataset::new(
        dataset.records().select(Axis(0), indices),
        dataset.targets().select(Axis(0), indices),
    )
    .with_feature_names(dataset.feature_names())
}
