// ── Server instance domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use jbossctl_api::Scope;

/// Runtime status of a server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerStatus {
    Started,
    Starting,
    Stopped,
    Stopping,
    Disabled,
    Failed,
    Unknown,
}

impl ServerStatus {
    /// Parse a wire status, falling back to `Unknown`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or(Self::Unknown)
    }
}

/// A server instance on a (non-master) host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    /// Owning host; always set so the instance can be addressed.
    pub host: String,
    pub server_group: String,
    pub status: ServerStatus,
}

impl Instance {
    pub fn running(&self) -> bool {
        self.status == ServerStatus::Started
    }

    /// Runtime scope: `host=h/server=s`.
    pub fn scope(&self) -> Scope<'_> {
        Scope::Server {
            host: &self.host,
            server: &self.name,
        }
    }

    /// Configuration scope for lifecycle operations: `host=h/server-config=s`.
    pub fn config_scope(&self) -> Scope<'_> {
        Scope::ServerConfig {
            host: &self.host,
            server: &self.name,
        }
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.host, self.name)
    }
}
