use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid location id {input:?}: {reason}")]
    InvalidLocationId { input: String, reason: String },
}
