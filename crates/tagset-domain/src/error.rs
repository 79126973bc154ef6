//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while a rule talks to the analysis host
#[derive(Error, Debug)]
pub enum Error {
    /// The host could not serve a block query
    #[error("Host query error: {message}")]
    HostQuery {
        /// Description of the query failure
        message: String,
    },

    /// The rule's section of the lint configuration could not be decoded
    #[error("Failed to decode configuration for rule {rule}: {message}")]
    ConfigDecode {
        /// Name of the rule whose configuration was requested
        rule: String,
        /// Description of the decode failure
        message: String,
    },

    /// The host rejected an emitted issue
    #[error("Host emission error: {message}")]
    HostEmission {
        /// Description of the emission failure
        message: String,
    },

    /// An expression could not be resolved to the requested shape
    #[error("Evaluation error: {message}")]
    Evaluation {
        /// Description of the evaluation failure
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a host query error
    pub fn host_query<S: Into<String>>(message: S) -> Self {
        Self::HostQuery {
            message: message.into(),
        }
    }

    /// Create a configuration decode error for a rule
    pub fn config_decode<R: Into<String>, S: Into<String>>(rule: R, message: S) -> Self {
        Self::ConfigDecode {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create a host emission error
    pub fn host_emission<S: Into<String>>(message: S) -> Self {
        Self::HostEmission {
            message: message.into(),
        }
    }

    /// Create an evaluation error
    pub fn evaluation<S: Into<String>>(message: S) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }

    /// Whether this failure is local to one expression and may be recovered
    ///
    /// Every other variant is fatal to the running check.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation { .. })
    }
}
