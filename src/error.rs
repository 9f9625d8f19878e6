//! Error types of the pipeline
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid dataset {0}")]
    InvalidDataset(String),
    #[error("got {predicted} predictions for {expected} ground truth labels")]
    LengthMismatch { predicted: usize, expected: usize },
    #[error("cannot score an empty set of predictions")]
    EmptyEvaluation,
    #[error(transparent)]
    Linfa(#[from] linfa::Error),
}
