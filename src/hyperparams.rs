use linfa::ParamGuard;
use linfa_trees::{DecisionTree, DecisionTreeParams};

use crate::error::{Error, Result};

/// The checked set of settings for one run of the pipeline.
///
/// Everything is fixed at the source level, there are no flags or environment
/// variables feeding into it.
#[derive(Clone, Copy, Debug)]
pub struct PipelineValidParams {
    test_fraction: f64,
    seed: u64,
    tree: DecisionTreeParams<f64, usize>,
}

impl PipelineValidParams {
    pub fn test_fraction(&self) -> f64 {
        self.test_fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Unchecked decision tree parameters, validated by `linfa-trees` when fitting
    pub fn tree(&self) -> DecisionTreeParams<f64, usize> {
        self.tree
    }
}

/// Pipeline settings whose values have not been checked yet.
///
/// ### Example
///
/// ```rust
/// use iris_tree::PipelineParams;
/// use linfa::ParamGuard;
///
/// let params = PipelineParams::new().test_fraction(0.25).seed(7);
/// assert!(params.check_ref().is_ok());
///
/// assert!(PipelineParams::new().test_fraction(1.5).check().is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PipelineParams(PipelineValidParams);

impl PipelineParams {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `test_fraction = 0.3`
    /// * `seed = 42`
    /// * `tree = DecisionTree::params()`
    pub fn new() -> Self {
        Self(PipelineValidParams {
            test_fraction: 0.3,
            seed: 42,
            tree: DecisionTree::params(),
        })
    }

    /// Sets the share of samples held out for testing
    pub fn test_fraction(mut self, test_fraction: f64) -> Self {
        self.0.test_fraction = test_fraction;
        self
    }

    /// Sets the seed of the random partition
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = seed;
        self
    }

    /// Sets the hyperparameters handed to the decision tree
    pub fn tree(mut self, tree: DecisionTreeParams<f64, usize>) -> Self {
        self.0.tree = tree;
        self
    }
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamGuard for PipelineParams {
    type Checked = PipelineValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let test_fraction = self.0.test_fraction;
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(Error::Parameters(format!(
                "test fraction should be in (0, 1), but was {}",
                test_fraction
            )));
        }
        self.0.tree.check_ref()?;

        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
