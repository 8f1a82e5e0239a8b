//! Error types for schedlens-core operations.
//!
//! The overlap engine itself is infallible -- every detection, aggregation,
//! explanation, and formatting call is a total function of its input. Errors
//! only arise at the loading boundary where hosts hand us serialized data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("Invalid schedule JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedError>;
