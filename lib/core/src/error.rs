use thiserror::Error;

use crate::attribute::Attribute;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Missing dependency '{dependency}' while inferring '{target}'")]
    MissingDependency {
        target: Attribute,
        dependency: Attribute,
    },

    #[error("Core attribute '{0}' absent from input")]
    MissingAttribute(Attribute),

    #[error("Invalid value for {attribute}: {value:?}")]
    InvalidData { attribute: Attribute, value: String },

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Unknown airport code: {0}")]
    UnknownAirport(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
