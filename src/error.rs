//! Unified error types for Veneer-Oxide

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Veneer-Oxide
///
/// Read queries in the control layer never surface these errors; they convert
/// resolution failures into per-type defaults. Actions and argument validation
/// propagate them to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Selection index outside the option range
    #[error("Index {index} is out of range for a list of {count} options")]
    IndexOutOfRange { index: usize, count: usize },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Action rejected by the page
    #[error("Action failed: {0}")]
    ActionFailed(String),

    /// Underlying driver error
    #[error("Driver error: {0}")]
    Driver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(selector: S) -> Self {
        Error::ElementNotFound(selector.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new out-of-range error
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Error::IndexOutOfRange { index, count }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a new action failed error
    pub fn action_failed<S: Into<String>>(msg: S) -> Self {
        Error::ActionFailed(msg.into())
    }

    /// Create a new driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
