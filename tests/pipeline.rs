use approx::assert_abs_diff_eq;
use iris_tree::loader::{self, N_FEATURES, N_SAMPLES};
use iris_tree::prelude::*;
use linfa::prelude::Records;
use linfa::ParamGuard;
use std::collections::HashSet;

#[test]
fn iris_split_has_expected_sizes() -> Result<()> {
    let params = PipelineParams::default().check()?;
    let dataset = loader::iris()?;

    let split = train_test_split(&dataset, params.test_fraction(), params.seed())?;

    assert_eq!(split.test_indices.len(), 45);
    assert_eq!(split.train_indices.len(), N_SAMPLES - 45);

    let train = split.train_indices.iter().collect::<HashSet<_>>();
    let test = split.test_indices.iter().collect::<HashSet<_>>();
    assert!(train.is_disjoint(&test));
    assert_eq!(train.union(&test).count(), N_SAMPLES);

    Ok(())
}

#[test]
fn repeated_runs_report_identical_results() -> Result<()> {
    let params = PipelineParams::default();

    let first = pipeline::run(&params)?;
    let second = pipeline::run(&params)?;

    assert_eq!(first.accuracy.to_bits(), second.accuracy.to_bits());
    assert_eq!(first.first_predictions, second.first_predictions);
    assert_eq!(first.importances, second.importances);
    assert_eq!(first.to_string(), second.to_string());

    Ok(())
}

#[test]
fn default_run_scores_well() -> Result<()> {
    let report = pipeline::run(&PipelineParams::default())?;

    assert_eq!(report.n_samples, N_SAMPLES);
    assert_eq!(report.n_features, N_FEATURES);
    assert_eq!(report.classes, vec![0, 1, 2]);
    assert_eq!(report.train_size, 105);
    assert_eq!(report.test_size, 45);
    assert!(report.depth > 0);
    assert!(report.n_leaves >= 3);

    // iris is easy for a single tree
    assert!(report.accuracy > 0.85 && report.accuracy <= 1.0);

    assert_eq!(report.importances.len(), N_FEATURES);
    assert!(report.importances.iter().all(|i| i.weight >= 0.0));
    assert_abs_diff_eq!(
        report.importances.iter().map(|i| i.weight).sum::<f64>(),
        1.0,
        epsilon = 1e-9
    );

    Ok(())
}

#[test]
fn other_fractions_keep_subsets_complementary() -> Result<()> {
    let dataset = loader::iris()?;

    for fraction in &[0.1, 0.25, 0.5, 0.8] {
        let split = train_test_split(&dataset, *fraction, 42)?;
        let expected = (fraction * N_SAMPLES as f64).ceil() as usize;

        assert_eq!(split.test.nsamples(), expected);
        assert_eq!(split.train.nsamples() + split.test.nsamples(), N_SAMPLES);
    }

    Ok(())
}

#[test]
fn invalid_fraction_aborts_run() {
    let res = pipeline::run(&PipelineParams::new().test_fraction(0.0));

    assert!(matches!(res, Err(Error::Parameters(_))));
}

#[test]
fn accuracy_matches_confusion_matrix() -> Result<()> {
    let params = PipelineParams::default().check()?;
    let dataset = loader::iris()?;
    let split = train_test_split(&dataset, params.test_fraction(), params.seed())?;

    let model = train(&params, &split.train)?;
    let evaluation = evaluate(&model, &split.test)?;

    assert_eq!(evaluation.predictions.len(), split.test.nsamples());
    assert_abs_diff_eq!(
        evaluation.accuracy as f32,
        evaluation.confusion.accuracy(),
        epsilon = 1e-6
    );

    Ok(())
}
