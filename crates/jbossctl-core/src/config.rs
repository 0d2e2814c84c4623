// ── Runtime connection configuration ──
//
// These types describe *how* to reach a management endpoint. They carry
// credential data and connection tuning, but never touch disk. The CLI
// builds a `ControllerConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::CoreError;

/// Username and password for the management realm.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Split a `user:pass` string at the first colon.
    ///
    /// The password may itself contain colons.
    pub fn parse(auth: &str) -> Result<Self, CoreError> {
        let (username, password) = auth.split_once(':').ok_or_else(|| CoreError::Config {
            message: "credentials must be given as user:pass".into(),
        })?;
        if username.is_empty() {
            return Err(CoreError::Config {
                message: "credentials are missing a username".into(),
            });
        }
        Ok(Self::new(username, SecretString::from(password.to_owned())))
    }
}

/// Configuration for connecting to a single controller.
///
/// Built by the CLI, passed to `Controller::connect` -- core never reads
/// config files.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Management endpoint as `host:port` (e.g. `serie1cabrio:9990`).
    pub controller: String,
    pub credentials: Credentials,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ControllerConfig {
    /// Build a config from a `host:port` endpoint and a `user:pass` string.
    pub fn new(controller: impl Into<String>, auth: &str) -> Result<Self, CoreError> {
        Ok(Self {
            controller: controller.into(),
            credentials: Credentials::parse(auth)?,
            timeout: Duration::from_secs(30),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
