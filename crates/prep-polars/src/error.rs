//! Error types for prep-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("{0}")]
    Core(#[from] prep_core::Error),
}

impl Error {
    /// Whether this error is a validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_invalid_argument())
    }

    /// Whether this error reports an unsupported argument combination
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Core(prep_core::Error::Unsupported(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
