use thiserror::Error;

/// Failure of a call against the student backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
