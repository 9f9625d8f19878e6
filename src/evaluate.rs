//! Scoring of the predictions on the held-out subset

use linfa::metrics::{ConfusionMatrix, ToConfusionMatrix};
use linfa::prelude::*;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use tracing::info;

use crate::error::{Error, Result};
use crate::model::TrainedModel;

/// Weight of a single feature in the decisions of a trained model
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureImportance {
    pub name: String,
    pub weight: f64,
}

/// Outcome of scoring a model on the test subset
#[derive(Debug)]
pub struct Evaluation {
    /// One predicted label per test row, aligned with the test subset
    pub predictions: Array1<usize>,
    pub accuracy: f64,
    pub confusion: ConfusionMatrix<usize>,
    pub importances: Vec<FeatureImportance>,
}

/// Fraction of positions where the predicted label equals the true label.
///
/// Fails if the two sequences differ in length or are empty.
pub fn accuracy<L, C, D>(predicted: &ArrayBase<C, Ix1>, truth: &ArrayBase<D, Ix1>) -> Result<f64>
where
    L: PartialEq,
    C: Data<Elem = L>,
    D: Data<Elem = L>,
{
    if predicted.len() != truth.len() {
        return Err(Error::LengthMismatch {
            predicted: predicted.len(),
            expected: truth.len(),
        });
    }
    if truth.is_empty() {
        return Err(Error::EmptyEvaluation);
    }

    let correct = predicted
        .iter()
        .zip(truth.iter())
        .filter(|(a, b)| a == b)
        .count();

    Ok(correct as f64 / truth.len() as f64)
}

/// Predict the test subset with `model`, then score the predictions against its labels.
pub fn evaluate<M: TrainedModel>(model: &M, test: &Dataset<f64, usize>) -> Result<Evaluation> {
    let predictions = model.predict_labels(test.records());
    let accuracy = accuracy(&predictions, test.targets())?;
    let confusion = predictions.confusion_matrix(test)?;

    let importances = test
        .feature_names()
        .into_iter()
        .zip(model.feature_importances())
        .map(|(name, weight)| FeatureImportance { name, weight })
        .collect();

    info!(samples = test.nsamples(), accuracy, "evaluated model");

    Ok(Evaluation {
        predictions,
        accuracy,
        confusion,
        importances,
    })
}
