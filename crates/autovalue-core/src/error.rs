//! Error types for AutoValue

use thiserror::Error;

/// Errors raised while reading backend configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    /// A boolean flag had a value we do not recognise
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: String, value: String },

    /// The backend URL could not be parsed
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

/// Main error type for backend client operations
#[derive(Error, Debug)]
pub enum BackendError {
    /// Configuration was missing or malformed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The underlying HTTP client could not be constructed
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Sending a request or reading its body failed
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the persisted session failed
    #[error("Session storage error: {0}")]
    SessionIo(#[from] std::io::Error),

    /// The process-wide handle was already constructed
    #[error("Backend client already initialized")]
    AlreadyInitialized,

    /// An operation needed a session but none is active
    #[error("Not signed in")]
    NotSignedIn,

    /// The session was replaced or signed out while a refresh was in flight
    #[error("Session changed during refresh")]
    SessionChanged,
}

/// A transmission string other than `manual` or `automatic`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown transmission: {0} (expected 'manual' or 'automatic')")]
pub struct ParseTransmissionError(pub String);

/// Result type alias using BackendError
pub type CoreResult<T> = Result<T, BackendError>;
