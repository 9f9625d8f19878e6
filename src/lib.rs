//! `iris-tree` trains a decision tree classifier on the Iris flower dataset and reports how
//! well it does on held-out samples.
//!
//! ## The big picture
//!
//! The crate is a thin pipeline on top of the [linfa](https://github.com/rust-ml/linfa)
//! ecosystem. Every numerical step is delegated:
//!
//! * the bundled data comes from `linfa-datasets`,
//! * tree induction and traversal come from `linfa-trees`,
//! * the confusion matrix comes from `linfa` itself.
//!
//! What lives here is the glue: a seeded train/test partition, an opaque
//! [`TrainedModel`](model::TrainedModel) handle, accuracy scoring and the console report.
//!
//! ## Example
//!
//! ```no_run
//! use iris_tree::prelude::*;
//!
//! let report = pipeline::run(&PipelineParams::default())?;
//! println!("{}", report);
//! # Ok::<(), iris_tree::Error>(())
//! ```

pub mod error;
pub mod evaluate;
mod hyperparams;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod report;
pub mod split;

pub use error::{Error, Result};
pub use hyperparams::{PipelineParams, PipelineValidParams};
