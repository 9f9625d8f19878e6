//! The single forward pass: load, split, fit, predict, score, report.

use linfa::ParamGuard;
use tracing::info;

use crate::error::Result;
use crate::evaluate::evaluate;
use crate::hyperparams::PipelineParams;
use crate::loader;
use crate::model::train;
use crate::report::Report;
use crate::split::train_test_split;

/// Run the whole pipeline on the bundled Iris dataset.
///
/// Every stage runs to completion before the next one starts. The first failure aborts the run
/// and is handed back unchanged.
pub fn run(params: &PipelineParams) -> Result<Report> {
    let params = params.check_ref()?;

    let dataset = loader::iris()?;
    info!(samples = dataset.targets().len(), "loaded dataset");

    let split = train_test_split(&dataset, params.test_fraction(), params.seed())?;
    info!(
        train = split.train_indices.len(),
        test = split.test_indices.len(),
        "split dataset"
    );

    let model = train(params, &split.train)?;
    let evaluation = evaluate(&model, &split.test)?;

    Ok(Report::new(&dataset, &split, &model, evaluation))
}
