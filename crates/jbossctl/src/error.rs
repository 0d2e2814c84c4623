//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use jbossctl_config::ConfigError;
use jbossctl_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const MANAGEMENT: i32 = 8;
}

/// Message the transport reports for a 401 that survived the Digest
/// handshake.
const UNAUTHORIZED: &str = "Request responded a 401 code";

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the management endpoint: {message}")]
    #[diagnostic(
        code(jbossctl::connection_failed),
        help(
            "Check that the controller is running and its management interface\n\
             listens on the given host:port (default 9990).\n\
             Try: jbossctl info -c host:9990 -vv"
        )
    )]
    ConnectionFailed { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(jbossctl::auth_failed),
        help(
            "Verify the management realm user (add-user.sh) and password.\n\
             Run: jbossctl config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(jbossctl::no_credentials),
        help(
            "Configure credentials with: jbossctl config init\n\
             Or pass --auth user:pass / set JBOSSCTL_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Management operations ────────────────────────────────────────

    #[error("Management operation failed: {message}")]
    #[diagnostic(code(jbossctl::management_failed))]
    ManagementFailed { message: String },

    #[error("'{operation}' is not supported on a {mode} server")]
    #[diagnostic(
        code(jbossctl::unsupported),
        help("Server, server-group and instance lifecycle only exist in domain mode.")
    )]
    Unsupported { operation: String, mode: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(jbossctl::not_found),
        help("Run: jbossctl {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(jbossctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(jbossctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: jbossctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(jbossctl::no_config),
        help(
            "Create one with: jbossctl config init\n\
             Or pass --controller host:port --auth user:pass.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(jbossctl::config))]
    Config(Box<ConfigError>),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(jbossctl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ManagementFailed { .. } => exit_code::MANAGEMENT,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::Unsupported { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub(crate) fn profile_not_found<'a>(
        name: String,
        known: impl Iterator<Item = &'a String>,
    ) -> Self {
        let mut available: Vec<_> = known.map(String::as_str).collect();
        available.sort_unstable();
        Self::ProfileNotFound {
            name,
            available: if available.is_empty() {
                "(none)".into()
            } else {
                available.join(", ")
            },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Server { message, .. } if message == UNAUTHORIZED => Self::AuthFailed {
                profile: "current".into(),
            },

            CoreError::Server { message, .. } => Self::ConnectionFailed { message },

            CoreError::Cli { message, raw } => {
                tracing::debug!(%raw, "management failure");
                Self::ManagementFailed { message }
            }

            CoreError::Unsupported { operation, mode } => Self::Unsupported { operation, mode },

            CoreError::NotFound { kind, name } => Self::NotFound {
                list_command: match kind.as_str() {
                    "Host" => "hosts list".into(),
                    _ => "instances list".into(),
                },
                resource_type: kind,
                identifier: name,
            },

            CoreError::Config { message } => Self::Validation {
                field: "configuration".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn transport_errors_map_to_connection_or_auth() {
        let refused: CliError = CoreError::Server {
            message: "Error requesting: connection refused".into(),
            raw: Value::Null,
        }
        .into();
        assert_eq!(refused.exit_code(), exit_code::CONNECTION);

        let unauthorized: CliError = CoreError::Server {
            message: UNAUTHORIZED.into(),
            raw: Value::Null,
        }
        .into();
        assert_eq!(unauthorized.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn protocol_errors_map_to_management_failure() {
        let err: CliError = CoreError::Cli {
            message: "WFLYCTL0216: Management resource not found".into(),
            raw: Value::Null,
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::MANAGEMENT);
        assert!(err.to_string().contains("WFLYCTL0216"));
    }

    #[test]
    fn unsupported_and_not_found_codes() {
        let unsupported: CliError = CoreError::Unsupported {
            operation: "start-servers".into(),
            mode: "STANDALONE".into(),
        }
        .into();
        assert_eq!(unsupported.exit_code(), exit_code::USAGE);

        let missing: CliError = CoreError::NotFound {
            kind: "Instance".into(),
            name: "slave/server-nine".into(),
        }
        .into();
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);
    }
}
