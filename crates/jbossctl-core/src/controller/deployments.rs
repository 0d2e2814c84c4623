// Server groups, deployments and context roots.

use tracing::{debug, warn};

use jbossctl_api::models::{Children, DeploymentRecord, ServerGroupRecord};
use jbossctl_api::{Address, Operation, Scope, Transport, catalog};

use super::Controller;
use crate::convert;
use crate::error::CoreError;
use crate::model::{Deployment, GroupRef, Listing, ServerGroup};

impl<T: Transport> Controller<T> {
    /// Server group names.
    ///
    /// A standalone server has none, so this answers without a call there.
    /// Degrades to an empty listing when the controller cannot report them.
    pub async fn server_group_names(&self) -> Listing<String> {
        if !self.is_domain() {
            return Listing::Found(Vec::new());
        }
        let listing: Listing<String> = self
            .invoke_as::<Vec<String>>(&catalog::server_group_names(), "server group names")
            .await
            .into();
        if let Some(err) = listing.error() {
            warn!(error = %err, "could not list server groups; assuming none");
        }
        listing
    }

    /// Every server group with its assigned deployments. Empty on a
    /// standalone server.
    pub async fn server_groups(&self) -> Result<Vec<ServerGroup>, CoreError> {
        if !self.is_domain() {
            return Ok(Vec::new());
        }
        let records: Children<ServerGroupRecord> = self
            .invoke_as(&catalog::server_groups(), "server groups")
            .await?;
        Ok(records
            .into_iter()
            .filter_map(|(name, record)| {
                record.map(|r| convert::server_group_from_record(name, r))
            })
            .collect())
    }

    /// The deployment content registry at the root.
    ///
    /// On a standalone server the entries carry their real enablement; on a
    /// domain controller they are all reported disabled and unassigned.
    pub async fn deployment_registry(&self) -> Result<Vec<Deployment>, CoreError> {
        let records: Children<DeploymentRecord> = self
            .invoke_as(&catalog::deployments(Address::root()), "deployments")
            .await?;
        Ok(convert::deployments(records, None))
    }

    /// Deployments assigned to `group`, or to every group when `None`.
    ///
    /// A standalone server has no groups: the root registry is returned.
    pub async fn assigned_deployments(
        &self,
        group: Option<GroupRef<'_>>,
    ) -> Result<Vec<Deployment>, CoreError> {
        match group {
            Some(group) => {
                let name = group.name();
                let op = catalog::deployments(self.prefix(Scope::ServerGroup(name)));
                let records: Children<DeploymentRecord> =
                    self.invoke_as(&op, "deployments").await?;
                let group = self.is_domain().then_some(name);
                Ok(convert::deployments(records, group))
            }
            None if self.is_domain() => Ok(self
                .server_groups()
                .await?
                .into_iter()
                .flat_map(|g| g.deployments)
                .collect()),
            None => self.deployment_registry().await,
        }
    }

    /// All deployments with their enablement and owning group.
    ///
    /// In domain mode the registry is reconciled with the assignments of
    /// every server group; standalone entries are returned as read.
    pub async fn deployments(&self) -> Result<Vec<Deployment>, CoreError> {
        let registry = self.deployment_registry().await?;
        if !self.is_domain() {
            return Ok(registry);
        }
        let assigned = self.assigned_deployments(None).await?;
        Ok(reconcile(registry, &assigned))
    }

    /// Context root of a web deployment.
    ///
    /// Disabled deployments and EJB jars have none and cost no call. On a
    /// domain controller the instances are asked in discovery order and the
    /// first non-empty answer wins; instances that fail are skipped. Never
    /// fails: "not found" is `None`.
    pub async fn context_root(&self, deployment: &Deployment) -> Option<String> {
        if !deployment.may_have_context_root() {
            return None;
        }

        if !self.is_domain() {
            let op = catalog::context_root(Address::root(), &deployment.name);
            return self.read_context_root(&op).await;
        }

        for instance in self.instances() {
            let op = catalog::context_root(self.prefix(instance.scope()), &deployment.name);
            if let Some(root) = self.read_context_root(&op).await {
                debug!(deployment = %deployment.name, %instance, %root, "context root found");
                return Some(root);
            }
        }
        None
    }

    async fn read_context_root(&self, op: &Operation) -> Option<String> {
        match self.invoke_as::<Option<String>>(op, "context-root").await {
            Ok(root) => root.filter(|r| !r.is_empty()),
            Err(e) => {
                debug!(address = %op.address(), error = %e, "no context root here");
                None
            }
        }
    }
}

/// Overlay group assignments onto the registry.
///
/// Each registry entry takes `enabled` and `server_group` from the first
/// assigned entry with the same name; entries never assigned end up
/// disabled and unassigned. Registry order is kept.
pub fn reconcile(registry: Vec<Deployment>, assigned: &[Deployment]) -> Vec<Deployment> {
    registry
        .into_iter()
        .map(|mut deployment| {
            match assigned.iter().find(|a| a.name == deployment.name) {
                Some(found) => {
                    deployment.enabled = found.enabled;
                    deployment.server_group.clone_from(&found.server_group);
                }
                None => {
                    deployment.enabled = false;
                    deployment.server_group = None;
                }
            }
            deployment
        })
        .collect()
}
