use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    InvalidLabel {
        row: usize,
        label: f64,
    },
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
    },
    Rand(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => format!("There's a size mismatch for {what}, got {got} and expected {expected}"),
            MlErr::EmptyDataset => "The dataset must contain at least one example".to_string(),
            MlErr::InvalidLabel { row, label } => {
                format!("The label of row {row} is {label}, expected either 0 or 1")
            }
            MlErr::InvalidHyperparameter { name, value } => {
                format!("The hyperparameter {name} has an invalid value {value}")
            }
            MlErr::Rand(msg) => format!("Failed to build the random distribution: {msg}"),
        };

        write!(f, "{s}")
    }
}

impl Error for MlErr {}

impl From<UniformError> for MlErr {
    fn from(value: UniformError) -> Self {
        Self::Rand(value.to_string())
    }
}
