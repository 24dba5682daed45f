use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by salesdash domain operations.
#[derive(Error, Debug)]
pub enum SalesdashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown value for {field}: {value}")]
    UnknownVariant { field: &'static str, value: String },
}

pub type Result<T> = StdResult<T, SalesdashError>;
