//! Error handling for the stock allocation engine
//!
//! The engine accepts pre-validated inputs and performs no I/O, so the
//! only failure mode is a caller contract violation. Insufficient stock
//! and unknown product names are represented in the result, never here.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
    },
}

impl EngineError {
    pub fn validation(field: &str, message: &str) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
