//! Console report of a pipeline run

use std::fmt;

use linfa::metrics::ConfusionMatrix;
use linfa::prelude::*;

use crate::evaluate::{Evaluation, FeatureImportance};
use crate::loader::CLASS_NAMES;
use crate::model::TrainedModel;
use crate::split::Split;

/// Number of leading test rows echoed in the report
const PREVIEW: usize = 5;

/// Everything printed at the end of a run
#[derive(Debug)]
pub struct Report {
    pub n_samples: usize,
    pub n_features: usize,
    pub feature_names: Vec<String>,
    pub classes: Vec<usize>,
    pub train_size: usize,
    pub test_size: usize,
    pub depth: usize,
    pub n_leaves: usize,
    pub first_predictions: Vec<usize>,
    pub first_truth: Vec<usize>,
    pub accuracy: f64,
    pub confusion: ConfusionMatrix<usize>,
    pub importances: Vec<FeatureImportance>,
}

impl Report {
    pub fn new<M: TrainedModel>(
        dataset: &Dataset<f64, usize>,
        split: &Split,
        model: &M,
        evaluation: Evaluation,
    ) -> Self {
        let mut classes = dataset.targets().to_vec();
        classes.sort_unstable();
        classes.dedup();

        Report {
            n_samples: dataset.nsamples(),
            n_features: dataset.nfeatures(),
            feature_names: dataset.feature_names(),
            classes,
            train_size: split.train.nsamples(),
            test_size: split.test.nsamples(),
            depth: model.depth(),
            n_leaves: model.n_leaves(),
            first_predictions: evaluation.predictions.iter().take(PREVIEW).copied().collect(),
            first_truth: split.test.targets().iter().take(PREVIEW).copied().collect(),
            accuracy: evaluation.accuracy,
            confusion: evaluation.confusion,
            importances: evaluation.importances,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let class_names = self
            .classes
            .iter()
            .map(|c| CLASS_NAMES.get(*c).copied().unwrap_or("unknown"))
            .collect::<Vec<_>>();

        writeln!(f, "Iris dataset:")?;
        writeln!(f, "Number of samples: {}", self.n_samples)?;
        writeln!(f, "Number of features: {}", self.n_features)?;
        writeln!(f, "Feature names: {:?}", self.feature_names)?;
        writeln!(f, "Target classes: {:?} {:?}", self.classes, class_names)?;
        writeln!(f)?;
        writeln!(f, "Features (X) shape: ({}, {})", self.n_samples, self.n_features)?;
        writeln!(f, "Target (y) shape: ({}, 1)", self.n_samples)?;
        writeln!(f)?;
        writeln!(f, "Training set size: {} samples", self.train_size)?;
        writeln!(f, "Testing set size: {} samples", self.test_size)?;
        writeln!(f)?;
        writeln!(f, "Decision tree fitted")?;
        writeln!(f, "Tree depth: {}", self.depth)?;
        writeln!(f, "Number of leaves: {}", self.n_leaves)?;
        writeln!(f)?;
        writeln!(f, "First {} predictions: {:?}", PREVIEW, self.first_predictions)?;
        writeln!(f, "First {} true labels: {:?}", PREVIEW, self.first_truth)?;
        writeln!(f)?;
        writeln!(
            f,
            "Accuracy: {:.4} ({:.2}%)",
            self.accuracy,
            self.accuracy * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "Confusion matrix:")?;
        writeln!(f, "{:?}", self.confusion)?;
        writeln!(f, "Feature importance:")?;
        for importance in &self.importances {
            writeln!(f, "{:20}: {:.4}", importance.name, importance.weight)?;
        }

        Ok(())
    }
}
