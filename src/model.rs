//! Fitting of the classifier and the handle the rest of the pipeline talks to
//!
//! Tree induction, the split criterion and the traversal at prediction time all belong to
//! `linfa-trees`. The pipeline only sees a [`TrainedModel`].

use linfa::prelude::*;
use linfa::ParamGuard;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};
use tracing::info;

use crate::error::Result;
use crate::hyperparams::PipelineValidParams;

/// A fitted classifier, used read-only once trained
pub trait TrainedModel {
    /// Predict one label per row of `records`, in row order
    fn predict_labels(&self, records: &Array2<f64>) -> Array1<usize>;

    /// Non-negative weight per feature, summing to one unless the model never splits
    fn feature_importances(&self) -> Vec<f64>;

    /// Depth of the deepest terminal region
    fn depth(&self) -> usize;

    /// Number of terminal regions
    fn n_leaves(&self) -> usize;
}

impl TrainedModel for DecisionTree<f64, usize> {
    fn predict_labels(&self, records: &Array2<f64>) -> Array1<usize> {
        self.predict(records)
    }

    fn feature_importances(&self) -> Vec<f64> {
        // `feature_importance` divides by the total and yields NaN for a lone leaf
        let decrease = self.mean_impurity_decrease();
        let total = decrease.iter().sum::<f64>();

        if total > 0.0 {
            decrease.into_iter().map(|x| x / total).collect()
        } else {
            vec![0.0; decrease.len()]
        }
    }

    fn depth(&self) -> usize {
        self.max_depth()
    }

    fn n_leaves(&self) -> usize {
        self.num_leaves()
    }
}

/// Fit a decision tree on the training subset with the tree settings of `params`
pub fn train(
    params: &PipelineValidParams,
    train: &Dataset<f64, usize>,
) -> Result<DecisionTree<f64, usize>> {
    let tree = params.tree().check()?;
    let model = tree.fit(train)?;

    info!(
        samples = train.nsamples(),
        depth = model.max_depth(),
        leaves = model.num_leaves(),
        "fitted decision tree"
    );

    Ok(model)
}
