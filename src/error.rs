use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("standard deviation must be > 0 (but was {0})")]
    InvalidStd(f64),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("cannot encode non-finite value {0}")]
    NotFinite(f64),

    #[error("cannot encode negative value {0} as uint256")]
    Negative(f64),

    #[error("value {value} does not fit in {ty}")]
    Overflow { value: f64, ty: &'static str },

    #[error("invalid ABI word '{0}'")]
    InvalidWord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
