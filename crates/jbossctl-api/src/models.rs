// Management API response records
//
// Raw shapes of the `result` payloads the client consumes. Attribute names
// on the wire are kebab-case; pool statistics are the one exception and use
// the JMX-style PascalCase names. Fields use `#[serde(default)]` liberally
// because attribute presence depends on the server version and on whether
// runtime attributes were requested.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Children keyed by resource name, in the order the server listed them.
///
/// The server answers `null` for a child it did not descend into, hence the
/// `Option` on every value.
pub type Children<T> = IndexMap<String, Option<T>>;

/// An attribute the server may report either as a literal or as an
/// unresolved `${name:fallback}` expression.
///
/// Expressions arrive as `{"EXPRESSION_VALUE": "${...}"}` and are kept
/// verbatim; the client never resolves them against server properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute<T> {
    Value(T),
    Expression {
        #[serde(rename = "EXPRESSION_VALUE")]
        expression: String,
    },
}

impl<T> Attribute<T> {
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Expression { expression } => Some(expression),
        }
    }
}

impl<T: FromStr> Attribute<T> {
    /// The literal value, or the parsed fallback of a `${name:fallback}`
    /// expression. `None` for expressions without a usable fallback.
    pub fn literal_or_fallback(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Expression { expression } => expression
                .strip_prefix("${")?
                .strip_suffix('}')?
                .split_once(':')?
                .1
                .parse()
                .ok(),
        }
    }
}

impl Attribute<String> {
    /// The literal, or the expression text itself.
    pub fn into_text(self) -> String {
        match self {
            Self::Value(value) | Self::Expression { expression: value } => value,
        }
    }
}

// ── Root ─────────────────────────────────────────────────────────────

/// Root resource from `read-resource` (recursive-depth 1, include-runtime).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RootResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub release_codename: Option<String>,
    #[serde(default)]
    pub release_version: Option<String>,
    #[serde(default)]
    pub launch_type: Option<String>,
    /// Only reported by a domain controller.
    #[serde(default)]
    pub local_host_name: Option<String>,
    #[serde(default)]
    pub system_property: Option<Children<SystemPropertyRecord>>,
}

/// `system-property={name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SystemPropertyRecord {
    #[serde(default)]
    pub value: Option<Attribute<String>>,
    #[serde(default)]
    pub boot_time: Option<Attribute<bool>>,
}

// ── Hosts ────────────────────────────────────────────────────────────

/// `host={name}` from `read-resource` with include-runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub release_codename: Option<String>,
    #[serde(default)]
    pub release_version: Option<String>,
    #[serde(default)]
    pub master: bool,
    #[serde(default)]
    pub host_state: Option<String>,
}

/// `host={h}/server-config={name}` with include-runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfigRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    /// Runtime status, e.g. `STARTED`, `STOPPED`, `DISABLED`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub auto_start: Option<Attribute<bool>>,
}

// ── Server groups & deployments ──────────────────────────────────────

/// `server-group={name}` read recursively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerGroupRecord {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub socket_binding_group: Option<String>,
    #[serde(default)]
    pub socket_binding_port_offset: Option<Attribute<i64>>,
    #[serde(default)]
    pub deployment: Option<Children<DeploymentRecord>>,
}

/// `deployment={name}`, either from the content registry at the root or
/// assigned under a server group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeploymentRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub runtime_name: String,
    /// Absent from registry entries on a domain controller.
    #[serde(default)]
    pub enabled: Option<bool>,
}

// ── Datasources ──────────────────────────────────────────────────────

/// `subsystem=datasources/data-source={name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataSourceRecord {
    #[serde(default)]
    pub connection_url: Option<Attribute<String>>,
    #[serde(default)]
    pub jndi_name: Option<Attribute<String>>,
    #[serde(default)]
    pub driver_class: Option<Attribute<String>>,
    #[serde(default)]
    pub driver_name: Option<Attribute<String>>,
    #[serde(default)]
    pub enabled: Option<Attribute<bool>>,
    #[serde(default)]
    pub jta: Option<Attribute<bool>>,
    #[serde(default)]
    pub max_pool_size: Option<Attribute<u32>>,
    #[serde(default)]
    pub min_pool_size: Option<Attribute<u32>>,
    #[serde(default)]
    pub user_name: Option<Attribute<String>>,
    #[serde(default)]
    pub statistics_enabled: Option<Attribute<bool>>,
    /// Present only with include-runtime + recursive.
    #[serde(default)]
    pub statistics: Option<DataSourceStatistics>,
}

/// `statistics=*` children of a data-source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceStatistics {
    #[serde(default)]
    pub pool: Option<PoolStatisticsRecord>,
}

/// `statistics=pool` runtime counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoolStatisticsRecord {
    #[serde(default)]
    pub active_count: u64,
    #[serde(default)]
    pub available_count: u64,
    #[serde(default)]
    pub created_count: u64,
    #[serde(default)]
    pub destroyed_count: u64,
    #[serde(default)]
    pub in_use_count: u64,
    #[serde(default)]
    pub max_used_count: u64,
    /// Milliseconds.
    #[serde(default)]
    pub max_wait_time: u64,
}

// ── Platform MBeans ──────────────────────────────────────────────────

/// `core-service=platform-mbean/type=memory` with include-runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MemoryRecord {
    #[serde(default)]
    pub heap_memory_usage: Option<MemoryUsageRecord>,
    #[serde(default)]
    pub non_heap_memory_usage: Option<MemoryUsageRecord>,
}

/// A `java.lang.management.MemoryUsage` snapshot, in bytes.
///
/// `max` is `-1` when the JVM reports no limit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MemoryUsageRecord {
    #[serde(default)]
    pub init: i64,
    #[serde(default)]
    pub used: i64,
    #[serde(default)]
    pub committed: i64,
    #[serde(default)]
    pub max: i64,
}
