use serde_json::Value;
use thiserror::Error;

/// Top-level error type for the `jbossctl-api` crate.
///
/// The management protocol has two failure tiers. `Server` means the
/// controller could not be reached or answered with an HTTP error and no
/// diagnostic body. `Cli` means the HTTP exchange worked but the management
/// operation was rejected or the envelope was malformed. Both carry the raw
/// payload for programmatic inspection. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport tier ──────────────────────────────────────────────
    /// The controller is unreachable or misbehaving.
    #[error("{message}")]
    Server { message: String, raw: Value },

    // ── Protocol tier ───────────────────────────────────────────────
    /// The management operation failed or the envelope was malformed.
    #[error("{message}")]
    Cli { message: String, raw: Value },

    // ── Setup ───────────────────────────────────────────────────────
    /// The controller address does not form a valid management URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl Error {
    /// Build a transport-tier error whose raw payload is the message itself.
    pub fn server(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Server {
            raw: Value::String(message.clone()),
            message,
        }
    }

    /// Build a protocol-tier error carrying the offending payload.
    pub fn cli(message: impl Into<String>, raw: Value) -> Self {
        Self::Cli {
            message: message.into(),
            raw,
        }
    }

    /// Human-readable summary.
    pub fn message(&self) -> String {
        match self {
            Self::Server { message, .. } | Self::Cli { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The raw payload attached to a tiered error, if any.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Self::Server { raw, .. } | Self::Cli { raw, .. } => Some(raw),
            Self::InvalidUrl(_) | Self::HttpClient(_) => None,
        }
    }

    /// Returns `true` for transport-tier failures.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns `true` for protocol-tier failures.
    pub fn is_cli_error(&self) -> bool {
        matches!(self, Self::Cli { .. })
    }
}
