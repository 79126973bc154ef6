//! Infrastructure error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading configuration or documents
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to extract configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid document {path}: {message}")]
    Document { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for Error {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
