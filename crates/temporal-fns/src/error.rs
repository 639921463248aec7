//! Error types for temporal-fns operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The call supplied fewer positional arguments than the function needs.
    #[error("{required} argument{} required, but only {given} present", plural(.required))]
    Arity { required: usize, given: usize },

    /// The value cannot be interpreted as a date.
    #[error("invalid date")]
    InvalidDate,

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimeZone(String),
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
