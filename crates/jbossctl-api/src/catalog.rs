// Operation catalog
//
// Pure constructors for every management operation the client issues. Each
// takes the already-resolved address prefix (see `Scope::prefix`) plus the
// operation's own arguments and appends the resource suffix. Nothing here
// knows about topology modes or talks to the network.

use crate::address::Address;
use crate::operation::Operation;

// ── Discovery ────────────────────────────────────────────────────────

/// Root attributes and one level of children, runtime included.
pub fn root_resource() -> Operation {
    Operation::read_resource(Address::root())
        .recursive_depth(1)
        .include_runtime()
}

/// `launch-type`: `DOMAIN` or `STANDALONE`.
pub fn launch_type() -> Operation {
    Operation::read_attribute(Address::root(), "launch-type")
}

/// Host names known to the domain controller.
pub fn host_names() -> Operation {
    Operation::read_children_names(Address::root(), "host")
}

/// One host's attributes. `prefix` is the host address.
pub fn host_resource(prefix: Address) -> Operation {
    Operation::read_resource(prefix).include_runtime()
}

/// Server configurations of a host, with their runtime status.
pub fn server_configs(prefix: Address) -> Operation {
    Operation::read_children_resources(prefix, "server-config").include_runtime()
}

/// Names of the running servers of a host.
pub fn server_names(prefix: Address) -> Operation {
    Operation::read_children_names(prefix, "server")
}

// ── Server groups & deployments ──────────────────────────────────────

pub fn server_group_names() -> Operation {
    Operation::read_children_names(Address::root(), "server-group")
}

/// Every server group with its assigned deployments.
pub fn server_groups() -> Operation {
    Operation::read_children_resources(Address::root(), "server-group").recursive()
}

/// Deployments under `prefix`: the content registry at the root, or the
/// assigned list of a server group.
pub fn deployments(prefix: Address) -> Operation {
    Operation::read_children_resources(prefix, "deployment")
}

/// `context-root` of a web deployment.
pub fn context_root(prefix: Address, deployment: &str) -> Operation {
    Operation::read_attribute(prefix.join(Address::deployment_web(deployment)), "context-root")
}

// ── Datasources ──────────────────────────────────────────────────────

/// Datasource definitions; `with_statistics` adds the runtime pool counters.
pub fn datasources(prefix: Address, with_statistics: bool) -> Operation {
    let op = Operation::read_children_resources(prefix.join(Address::datasources()), "data-source");
    if with_statistics {
        op.include_runtime().recursive()
    } else {
        op
    }
}

/// The `enabled` attribute of one datasource.
pub fn datasource_enabled(prefix: Address, datasource: &str) -> Operation {
    Operation::read_attribute(prefix.join(Address::data_source(datasource)), "enabled")
}

pub fn flush_idle_connections(prefix: Address, datasource: &str) -> Operation {
    Operation::new(
        "flush-idle-connection-in-pool",
        prefix.join(Address::data_source(datasource)),
    )
}

pub fn test_connection(prefix: Address, datasource: &str) -> Operation {
    Operation::new(
        "test-connection-in-pool",
        prefix.join(Address::data_source(datasource)),
    )
}

// ── Runtime ──────────────────────────────────────────────────────────

/// Heap and non-heap usage of the JVM at `prefix`.
pub fn memory(prefix: Address) -> Operation {
    Operation::read_resource(prefix.join(Address::memory())).include_runtime()
}

/// `server-state` of the server at `prefix`.
pub fn server_state(prefix: Address) -> Operation {
    Operation::read_attribute(prefix, "server-state")
}

// ── Lifecycle ────────────────────────────────────────────────────────

/// Whole-server shutdown, optionally followed by a restart.
pub fn shutdown(restart: bool) -> Operation {
    let op = Operation::new("shutdown", Address::root());
    if restart { op.param("restart", true) } else { op }
}

/// Lifecycle operations on one server configuration. `prefix` is the
/// `host=h/server-config=s` address.
pub fn restart_server(prefix: Address) -> Operation {
    Operation::new("restart", prefix)
}

pub fn start_server(prefix: Address) -> Operation {
    Operation::new("start", prefix)
}

pub fn stop_server(prefix: Address) -> Operation {
    Operation::new("stop", prefix)
}

/// Bulk lifecycle: a server group, or the whole domain at the root.
pub fn start_servers(prefix: Address) -> Operation {
    Operation::new("start-servers", prefix)
}

pub fn stop_servers(prefix: Address) -> Operation {
    Operation::new("stop-servers", prefix)
}
