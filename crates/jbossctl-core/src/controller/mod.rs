// ── Controller ──
//
// A connected, discovered management endpoint. Construction runs topology
// discovery to completion; afterwards the topology is read-only and every
// operation is one sequential round trip (or a short sequence of them).
// The operations live in sibling modules as additional `impl` blocks.

mod datasources;
mod deployments;
mod discovery;
mod lifecycle;
mod runtime;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use jbossctl_api::{
    Address, HttpTransport, LaunchType, ManagementClient, Operation, Scope, Transport,
    TransportConfig, catalog,
};

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::model::{Host, Instance, Listing, ProductInfo, SystemProperty};
use crate::topology::Topology;

pub use deployments::reconcile;

/// A management endpoint plus its discovered topology.
pub struct Controller<T = HttpTransport> {
    client: ManagementClient<T>,
    topology: Topology,
}

impl Controller<HttpTransport> {
    /// Connect over HTTP and run discovery.
    pub async fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport_config = TransportConfig {
            timeout: config.timeout,
        };
        let client = ManagementClient::connect(
            &config.controller,
            config.credentials.username.clone(),
            config.credentials.password.clone(),
            &transport_config,
        )?;
        info!(controller = %config.controller, "connecting");
        Self::discover(client).await
    }
}

impl<T: Transport> Controller<T> {
    /// Run discovery over an arbitrary transport.
    pub async fn with_transport(transport: T) -> Result<Self, CoreError> {
        Self::discover(ManagementClient::new(transport)).await
    }

    async fn discover(client: ManagementClient<T>) -> Result<Self, CoreError> {
        let topology = discovery::discover(&client).await?;
        Ok(Self { client, topology })
    }

    // ── Topology accessors ───────────────────────────────────────────

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn launch_type(&self) -> LaunchType {
        self.topology.launch_type
    }

    pub fn is_domain(&self) -> bool {
        self.topology.is_domain()
    }

    pub fn name(&self) -> &str {
        &self.topology.name
    }

    pub fn product(&self) -> &ProductInfo {
        &self.topology.product
    }

    pub fn hosts(&self) -> &[Host] {
        &self.topology.hosts
    }

    /// All instances in discovery order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.topology.instances()
    }

    pub fn system_properties(&self) -> &[SystemProperty] {
        &self.topology.system_properties
    }

    pub fn find_host(&self, name: &str) -> Result<&Host, CoreError> {
        self.topology.host(name).ok_or_else(|| CoreError::NotFound {
            kind: "Host".into(),
            name: name.to_owned(),
        })
    }

    pub fn find_instance(&self, host: &str, server: &str) -> Result<&Instance, CoreError> {
        self.topology
            .instance(host, server)
            .ok_or_else(|| CoreError::NotFound {
                kind: "Instance".into(),
                name: format!("{host}/{server}"),
            })
    }

    /// Names of the servers running on `host`.
    ///
    /// Degrades to an empty listing when the host cannot report them (for
    /// instance when no server has been configured yet). A standalone server
    /// has no hosts to ask, so this is empty without a call.
    pub async fn server_names(&self, host: &str) -> Listing<String> {
        if !self.is_domain() {
            return Listing::Found(Vec::new());
        }
        let op = catalog::server_names(self.prefix(Scope::Host(host)));
        let listing: Listing<String> = self
            .invoke_as::<Vec<String>>(&op, "server names")
            .await
            .into();
        if let Some(err) = listing.error() {
            warn!(host, error = %err, "could not list servers; assuming none");
        }
        listing
    }

    // ── Raw access ───────────────────────────────────────────────────

    /// Run an arbitrary operation and return its `result`.
    pub async fn invoke(&self, operation: &Operation) -> Result<Value, CoreError> {
        Ok(self.client.invoke(operation).await?)
    }

    pub(crate) async fn invoke_as<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        what: &str,
    ) -> Result<R, CoreError> {
        Ok(self.client.invoke_as(operation, what).await?)
    }

    // ── Addressing ───────────────────────────────────────────────────

    /// Resolve `scope` against the launch type. Scopes are meaningless on a
    /// standalone server and are dropped there.
    pub(crate) fn prefix(&self, scope: Scope<'_>) -> Address {
        if !self.is_domain() && !scope.is_root() {
            warn!(?scope, "ignoring scope on a standalone server");
        }
        scope.prefix(self.launch_type())
    }

    /// Prefix for an optional instance; `None` is the root.
    pub(crate) fn instance_prefix(&self, instance: Option<&Instance>) -> Address {
        instance.map_or_else(Address::root, |i| self.prefix(i.scope()))
    }

    pub(crate) fn require_domain(&self, operation: &str) -> Result<(), CoreError> {
        if self.is_domain() {
            Ok(())
        } else {
            Err(CoreError::Unsupported {
                operation: operation.to_owned(),
                mode: self.launch_type().to_string(),
            })
        }
    }
}
