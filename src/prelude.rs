//! iris-tree prelude.
//!
//! Types, traits and functions needed to run or pick apart the pipeline.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::hyperparams::{PipelineParams, PipelineValidParams};

#[doc(no_inline)]
pub use crate::evaluate::{accuracy, evaluate, Evaluation, FeatureImportance};

#[doc(no_inline)]
pub use crate::model::{train, TrainedModel};

#[doc(no_inline)]
pub use crate::split::{train_test_split, Split};

#[doc(no_inline)]
pub use crate::{loader, pipeline, report::Report};
