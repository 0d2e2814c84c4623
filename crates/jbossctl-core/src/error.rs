// ── Core error types ──
//
// The two management-protocol tiers pass through unchanged so callers can
// still tell an unreachable controller from a rejected operation. The rest
// are caller-side errors raised before any request is sent.

use serde_json::Value;
use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Management protocol ──────────────────────────────────────────
    /// Transport tier: the controller is unreachable or answered an HTTP
    /// error without a body.
    #[error("{message}")]
    Server { message: String, raw: Value },

    /// Protocol tier: the operation was rejected or the reply was malformed.
    #[error("{message}")]
    Cli { message: String, raw: Value },

    // ── Caller errors ────────────────────────────────────────────────
    #[error("Operation not supported in {mode} mode: {operation}")]
    Unsupported { operation: String, mode: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: String, name: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Human-readable summary.
    pub fn message(&self) -> String {
        match self {
            Self::Server { message, .. } | Self::Cli { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Raw payload of a protocol-level failure.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Self::Server { raw, .. } | Self::Cli { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    pub fn is_cli_error(&self) -> bool {
        matches!(self, Self::Cli { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<jbossctl_api::Error> for CoreError {
    fn from(err: jbossctl_api::Error) -> Self {
        match err {
            jbossctl_api::Error::Server { message, raw } => CoreError::Server { message, raw },
            jbossctl_api::Error::Cli { message, raw } => CoreError::Cli { message, raw },
            jbossctl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            jbossctl_api::Error::HttpClient(message) => CoreError::Config { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tiers_map_one_to_one() {
        let err: CoreError = jbossctl_api::Error::cli("boom", json!({ "outcome": "failed" })).into();
        assert!(err.is_cli_error());
        assert_eq!(err.message(), "boom");
        assert_eq!(err.raw(), Some(&json!({ "outcome": "failed" })));

        let err: CoreError = jbossctl_api::Error::server("Error requesting: refused").into();
        assert!(err.is_server_error());
        assert_eq!(err.to_string(), "Error requesting: refused");
    }

    #[test]
    fn unsupported_names_mode() {
        let err = CoreError::Unsupported {
            operation: "start-servers".into(),
            mode: "STANDALONE".into(),
        };
        assert_eq!(
            err.to_string(),
            "Operation not supported in STANDALONE mode: start-servers"
        );
        assert!(err.raw().is_none());
    }
}
