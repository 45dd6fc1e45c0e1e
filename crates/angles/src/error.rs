use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("scale must be a positive finite number of units per turn, got {0}")]
    InvalidScale(f64),
    #[error("cannot average an empty sequence of angles")]
    EmptyInput,
    #[error("angles cancel out, their average direction is undefined")]
    Cancellation,
}

pub type Result<T> = std::result::Result<T, AngleError>;
