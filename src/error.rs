// --- File: src/error.rs ---

use thiserror::Error;

/// Failures raised by a [`Transport`](crate::zarinpal::Transport) while talking to the gateway.
///
/// `request` and `verify` hand these back to the caller untouched.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed gateway response: {0}")]
    Decode(#[from] serde_json::Error),
    // Escape hatch for transports that are not built on reqwest
    #[error("Transport failure: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} env var")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
