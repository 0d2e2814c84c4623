// Topology discovery: root resource, launch type, then (domain) hosts and
// their server configurations. Runs once per connection.

use serde_json::Value;
use tracing::{debug, info, warn};

use jbossctl_api::models::{Children, HostRecord, RootResource, ServerConfigRecord};
use jbossctl_api::{LaunchType, ManagementClient, Scope, Transport, catalog};

use crate::convert;
use crate::error::CoreError;
use crate::model::{Host, Instance, Listing, ProductInfo};
use crate::topology::{DiscoveryState, Topology};

pub(super) async fn discover<T: Transport>(
    client: &ManagementClient<T>,
) -> Result<Topology, CoreError> {
    let mut state = DiscoveryState::Uninitialized;

    let mut root: RootResource = client
        .invoke_as(&catalog::root_resource(), "root resource")
        .await?;
    let launch_type = read_launch_type(client).await?;
    state.advance(DiscoveryState::ModeKnown);

    let name = root.name.clone().unwrap_or_default();
    let system_properties = root
        .system_property
        .take()
        .map(convert::system_properties)
        .unwrap_or_default();

    let hosts = match launch_type {
        LaunchType::Standalone => {
            state.advance(DiscoveryState::StandaloneReady);
            vec![convert::standalone_host(&name, &root)]
        }
        LaunchType::Domain => {
            let mut hosts = read_hosts(client).await?;
            state.advance(DiscoveryState::DomainHostsLoaded);

            for host in hosts.iter_mut().filter(|h| !h.master) {
                host.instances = read_instances(client, &host.name).await.into_items();
            }
            state.advance(DiscoveryState::DomainInstancesLoaded);
            hosts
        }
    };

    let topology = Topology {
        name,
        launch_type,
        product: ProductInfo::from(&root),
        local_host_name: root.local_host_name.take(),
        system_properties,
        hosts,
    };

    info!(
        name = %topology.name,
        launch_type = %topology.launch_type,
        hosts = topology.hosts.len(),
        instances = topology.instances().count(),
        "discovery complete"
    );
    Ok(topology)
}

async fn read_launch_type<T: Transport>(
    client: &ManagementClient<T>,
) -> Result<LaunchType, CoreError> {
    let raw: String = client
        .invoke_as(&catalog::launch_type(), "launch-type")
        .await?;
    raw.parse().map_err(|_| CoreError::Cli {
        message: format!("Unexpected payload for launch-type: {raw}"),
        raw: Value::String(raw.clone()),
    })
}

async fn read_hosts<T: Transport>(client: &ManagementClient<T>) -> Result<Vec<Host>, CoreError> {
    let names: Vec<String> = client
        .invoke_as(&catalog::host_names(), "host names")
        .await?;

    let mut hosts = Vec::with_capacity(names.len());
    for name in &names {
        let prefix = Scope::Host(name).prefix(LaunchType::Domain);
        let record: HostRecord = client
            .invoke_as(&catalog::host_resource(prefix), "host")
            .await?;
        debug!(host = %name, master = record.master, "host discovered");
        hosts.push(convert::host_from_record(name, &record));
    }
    Ok(hosts)
}

/// Server configurations of one host. A host that cannot report them is
/// treated as having none.
async fn read_instances<T: Transport>(
    client: &ManagementClient<T>,
    host: &str,
) -> Listing<Instance> {
    let prefix = Scope::Host(host).prefix(LaunchType::Domain);
    let result: Result<Children<ServerConfigRecord>, _> = client
        .invoke_as(&catalog::server_configs(prefix), "server configs")
        .await;

    match result {
        Ok(configs) => Listing::Found(convert::instances_from_configs(host, configs)),
        Err(e) => {
            warn!(host, error = %e, "could not read server configs; assuming none");
            Listing::Degraded(e.into())
        }
    }
}
