// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Backend(BackendError),
    /// A group key that is not part of the loaded hierarchy.
    UnknownGroup(String),
}

/// Failure talking to the capture backend.
///
/// Callers treat every variant as the same "request failed" condition; the
/// variants only carry detail for logs and error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The request never produced a response (connection refused, timeout, ...).
    Transport(String),

    /// The response body could not be decoded.
    Decode(String),

    /// The endpoint URL could not be built from the configured base URL.
    InvalidUrl(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Status(code) => write!(f, "HTTP error! status: {}", code),
            BackendError::Transport(msg) => write!(f, "Request failed: {}", msg),
            BackendError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            BackendError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
            Error::UnknownGroup(key) => write!(f, "Unknown group: {}", key),
        }
    }
}

impl std::error::Error for Error {}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
