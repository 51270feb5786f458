use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] fareseer_core::Error),

    #[error("No price entry for neighbour key {0:?}")]
    LookupMismatch(String),

    #[error("Cannot fit a predictor on an empty training set")]
    EmptyTrainingSet,
}
