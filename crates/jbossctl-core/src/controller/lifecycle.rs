// Server and server-group lifecycle.
//
// `start`/`stop` and the bulk `*-servers` operations only exist on a domain
// controller; on a standalone server they fail before any request is sent.

use serde_json::Value;
use tracing::{info, warn};

use jbossctl_api::{Address, Scope, Transport, catalog};

use super::Controller;
use crate::error::CoreError;
use crate::model::{GroupRef, Instance};

impl<T: Transport> Controller<T> {
    /// Restart one instance, or shut the whole server down with a restart.
    ///
    /// On a standalone server the instance is ignored.
    pub async fn restart(&self, instance: Option<&Instance>) -> Result<Value, CoreError> {
        let op = match instance {
            Some(instance) if self.is_domain() => {
                catalog::restart_server(self.prefix(instance.config_scope()))
            }
            Some(instance) => {
                warn!(%instance, "ignoring instance on a standalone server");
                catalog::shutdown(true)
            }
            None => catalog::shutdown(true),
        };
        info!(operation = op.name(), address = %op.address(), "restart");
        self.invoke(&op).await
    }

    /// Shut the whole server down without restarting it.
    pub async fn shutdown(&self) -> Result<Value, CoreError> {
        info!("shutdown");
        self.invoke(&catalog::shutdown(false)).await
    }

    pub async fn start_server(&self, instance: &Instance) -> Result<Value, CoreError> {
        self.require_domain("start")?;
        info!(%instance, "start");
        let op = catalog::start_server(self.prefix(instance.config_scope()));
        self.invoke(&op).await
    }

    pub async fn stop_server(&self, instance: &Instance) -> Result<Value, CoreError> {
        self.require_domain("stop")?;
        info!(%instance, "stop");
        let op = catalog::stop_server(self.prefix(instance.config_scope()));
        self.invoke(&op).await
    }

    /// Start every server of `group`, or of the whole domain.
    pub async fn start_servers(&self, group: Option<GroupRef<'_>>) -> Result<Value, CoreError> {
        self.require_domain("start-servers")?;
        let op = catalog::start_servers(self.group_prefix(group));
        info!(address = %op.address(), "start-servers");
        self.invoke(&op).await
    }

    /// Stop every server of `group`, or of the whole domain.
    pub async fn stop_servers(&self, group: Option<GroupRef<'_>>) -> Result<Value, CoreError> {
        self.require_domain("stop-servers")?;
        let op = catalog::stop_servers(self.group_prefix(group));
        info!(address = %op.address(), "stop-servers");
        self.invoke(&op).await
    }

    fn group_prefix(&self, group: Option<GroupRef<'_>>) -> Address {
        group.map_or_else(Address::root, |g| self.prefix(Scope::ServerGroup(g.name())))
    }
}
