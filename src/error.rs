use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("\"{0}\" is not a valid resistance value string")]
    InvalidValue(String),

    #[error("target value must be a positive resistance, got {0}")]
    InvalidTarget(f64),

    #[error("a parallel combination cannot contain a zero resistance")]
    ZeroInParallel,

    #[error("a combination needs at least two resistances, got {0}")]
    TooFewOperands(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
