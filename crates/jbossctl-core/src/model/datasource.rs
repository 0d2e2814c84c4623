// ── Datasource domain types ──

use serde::{Deserialize, Serialize};

/// A connection pool under a server's `datasources` subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub connection_url: Option<String>,
    pub jndi_name: Option<String>,
    pub driver_class: Option<String>,
    pub driver_name: Option<String>,
    pub enabled: bool,
    pub jta: bool,
    pub min_pool_size: Option<u32>,
    pub max_pool_size: Option<u32>,
    pub username: Option<String>,
    /// Present only when runtime statistics were requested and the server
    /// reports a `statistics-enabled` attribute.
    pub statistics: Option<PoolStatistics>,
}

/// Runtime pool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatistics {
    pub active: u64,
    pub available: u64,
    pub created: u64,
    pub destroyed: u64,
    pub in_use: u64,
    pub max_used: u64,
    /// Milliseconds.
    pub max_wait_time: u64,
}
