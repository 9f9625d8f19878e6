//! Loading of the bundled Iris flower dataset
//!
//! The measurements ship with `linfa-datasets`, this module only checks that what comes back
//! has the shape the rest of the pipeline relies on.

use linfa::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};

/// Number of samples in the Iris dataset
pub const N_SAMPLES: usize = 150;
/// Number of numeric measurements per sample
pub const N_FEATURES: usize = 4;
/// Species names, indexed by the integer label
pub const CLASS_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Read in the Iris flower dataset with named features and labels in `{0, 1, 2}`.
pub fn iris() -> Result<Dataset<f64, usize>> {
    let dataset = linfa_datasets::iris();
    validate(&dataset, N_SAMPLES)?;

    debug!(
        samples = dataset.nsamples(),
        features = dataset.nfeatures(),
        "loaded iris dataset"
    );

    Ok(dataset)
}

/// Check that a dataset holds `expected_rows` samples of `N_FEATURES` named features, and that
/// every label is a known class.
pub fn validate(dataset: &Dataset<f64, usize>, expected_rows: usize) -> Result<()> {
    if dataset.nfeatures() != N_FEATURES {
        return Err(Error::InvalidDataset(format!(
            "expected {} features, got {}",
            N_FEATURES,
            dataset.nfeatures()
        )));
    }

    if dataset.nsamples() != expected_rows || dataset.targets().len() != expected_rows {
        return Err(Error::InvalidDataset(format!(
            "expected {} samples, got {} records and {} targets",
            expected_rows,
            dataset.nsamples(),
            dataset.targets().len()
        )));
    }

    let names = dataset.feature_names();
    if names.len() != N_FEATURES {
        return Err(Error::InvalidDataset(format!(
            "expected {} feature names, got {:?}",
            N_FEATURES, names
        )));
    }

    if let Some(label) = dataset.targets().iter().find(|l| **l >= CLASS_NAMES.len()) {
        return Err(Error::InvalidDataset(format!("unknown class label {}", label)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn named(dataset: Dataset<f64, usize>) -> Dataset<f64, usize> {
        dataset.with_feature_names(vec!["a", "b", "c", "d"])
    }

    #[test]
    fn bundled_dataset_has_expected_shape() -> Result<()> {
        let dataset = iris()?;

        assert_eq!(dataset.nsamples(), N_SAMPLES);
        assert_eq!(dataset.nfeatures(), N_FEATURES);
        assert_eq!(
            dataset.feature_names(),
            vec!["sepal length", "sepal width", "petal length", "petal width"]
        );

        // 50 samples of every species
        for class in 0..CLASS_NAMES.len() {
            let count = dataset.targets().iter().filter(|l| **l == class).count();
            assert_eq!(count, 50);
        }

        Ok(())
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let dataset = Dataset::new(Array2::zeros((2, 3)), array![0, 1]);

        assert!(matches!(
            validate(&dataset, 2),
            Err(Error::InvalidDataset(_))
        ));
    }

    #[test]
    fn rejects_wrong_row_count() {
        let dataset = named(Dataset::new(Array2::zeros((2, 4)), array![0, 1]));

        assert!(validate(&dataset, 2).is_ok());
        assert!(validate(&dataset, 3).is_err());
    }

    #[test]
    fn rejects_unknown_label() {
        let dataset = named(Dataset::new(Array2::zeros((2, 4)), array![0, 3]));

        assert!(matches!(
            validate(&dataset, 2),
            Err(Error::InvalidDataset(_))
        ));
    }
}
