// ── API-to-domain type conversions ──
//
// Bridges raw `jbossctl_api::models` records into `crate::model` types.
// Records keyed by resource name take the key as the entity name; records
// the server reported as `null` are skipped.

use jbossctl_api::models::{
    Attribute, Children, DataSourceRecord, DeploymentRecord, HostRecord, PoolStatisticsRecord,
    RootResource, ServerConfigRecord, ServerGroupRecord, SystemPropertyRecord,
};

use crate::model::{
    DataSource, Deployment, Host, Instance, PoolStatistics, ProductInfo, ServerGroup,
    ServerStatus, SystemProperty,
};

// ── Product metadata ─────────────────────────────────────────────────

impl From<&RootResource> for ProductInfo {
    fn from(root: &RootResource) -> Self {
        Self {
            product_name: root.product_name.clone(),
            product_version: root.product_version.clone(),
            release_codename: root.release_codename.clone(),
            release_version: root.release_version.clone(),
        }
    }
}

impl From<&HostRecord> for ProductInfo {
    fn from(host: &HostRecord) -> Self {
        Self {
            product_name: host.product_name.clone(),
            product_version: host.product_version.clone(),
            release_codename: host.release_codename.clone(),
            release_version: host.release_version.clone(),
        }
    }
}

// ── Topology ─────────────────────────────────────────────────────────

/// The synthetic master host standing in for a standalone server.
pub fn standalone_host(name: &str, root: &RootResource) -> Host {
    Host {
        name: name.to_owned(),
        product: ProductInfo::from(root),
        master: true,
        state: None,
        instances: Vec::new(),
    }
}

/// A discovered host, named by its address key. Master hosts never own
/// instances.
pub fn host_from_record(name: &str, record: &HostRecord) -> Host {
    Host {
        name: name.to_owned(),
        product: ProductInfo::from(record),
        master: record.master,
        state: record.host_state.clone(),
        instances: Vec::new(),
    }
}

/// Instances of `host` from its `server-config` children.
pub fn instances_from_configs(host: &str, configs: Children<ServerConfigRecord>) -> Vec<Instance> {
    configs
        .into_iter()
        .filter_map(|(key, record)| record.map(|r| (key, r)))
        .map(|(key, record)| Instance {
            name: key,
            host: host.to_owned(),
            server_group: record.group.unwrap_or_default(),
            status: ServerStatus::from_wire(record.status.as_deref()),
        })
        .collect()
}

pub fn system_properties(properties: Children<SystemPropertyRecord>) -> Vec<SystemProperty> {
    properties
        .into_iter()
        .map(|(name, record)| {
            let record = record.unwrap_or(SystemPropertyRecord {
                value: None,
                boot_time: None,
            });
            SystemProperty {
                name,
                value: text(record.value).unwrap_or_default(),
                boot_time: literal(record.boot_time).unwrap_or(false),
            }
        })
        .collect()
}

// ── Server groups & deployments ──────────────────────────────────────

pub fn deployment_from_record(key: String, record: DeploymentRecord) -> Deployment {
    Deployment {
        name: record.name.unwrap_or(key),
        runtime_name: record.runtime_name,
        enabled: record.enabled.unwrap_or(false),
        server_group: None,
    }
}

/// Deployments from a `deployment` child map, tagged with `group` when they
/// were read under a server group.
pub fn deployments(records: Children<DeploymentRecord>, group: Option<&str>) -> Vec<Deployment> {
    records
        .into_iter()
        .filter_map(|(key, record)| record.map(|r| deployment_from_record(key, r)))
        .map(|d| match group {
            Some(group) => d.in_group(group),
            None => d,
        })
        .collect()
}

pub fn server_group_from_record(name: String, record: ServerGroupRecord) -> ServerGroup {
    let deployments = record
        .deployment
        .map(|d| deployments(d, Some(&name)))
        .unwrap_or_default();
    ServerGroup {
        profile: record.profile,
        socket_binding_group: record.socket_binding_group,
        socket_binding_port_offset: literal(record.socket_binding_port_offset).unwrap_or(0),
        deployments,
        name,
    }
}

// ── Datasources ──────────────────────────────────────────────────────

impl From<PoolStatisticsRecord> for PoolStatistics {
    fn from(pool: PoolStatisticsRecord) -> Self {
        Self {
            active: pool.active_count,
            available: pool.available_count,
            created: pool.created_count,
            destroyed: pool.destroyed_count,
            in_use: pool.in_use_count,
            max_used: pool.max_used_count,
            max_wait_time: pool.max_wait_time,
        }
    }
}

/// Pool counters are kept whenever the server reports `statistics-enabled`
/// at all, whatever its value, and the `statistics=pool` child is present.
pub fn datasource_from_record(name: String, record: DataSourceRecord) -> DataSource {
    let statistics = if record.statistics_enabled.is_some() {
        record
            .statistics
            .and_then(|s| s.pool)
            .map(PoolStatistics::from)
    } else {
        None
    };

    DataSource {
        name,
        connection_url: text(record.connection_url),
        jndi_name: text(record.jndi_name),
        driver_class: text(record.driver_class),
        driver_name: text(record.driver_name),
        enabled: literal(record.enabled).unwrap_or(false),
        jta: literal(record.jta).unwrap_or(false),
        min_pool_size: literal(record.min_pool_size),
        max_pool_size: literal(record.max_pool_size),
        username: text(record.user_name),
        statistics,
    }
}

// ── Attributes ───────────────────────────────────────────────────────

/// String attributes keep expressions as their raw `${...}` text.
fn text(attribute: Option<Attribute<String>>) -> Option<String> {
    attribute.map(Attribute::into_text)
}

/// Typed attributes fall back to the expression's default, if any.
fn literal<T: std::str::FromStr>(attribute: Option<Attribute<T>>) -> Option<T> {
    attribute.and_then(Attribute::literal_or_fallback)
}
