// ── Discovered topology ──
//
// The immutable snapshot built once by discovery. A topology change on the
// live server requires connecting again.

use serde::Serialize;
use strum::Display;
use tracing::trace;

use jbossctl_api::LaunchType;

use crate::model::{Host, Instance, ProductInfo, SystemProperty};

/// Discovery progress. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DiscoveryState {
    Uninitialized,
    ModeKnown,
    StandaloneReady,
    DomainHostsLoaded,
    DomainInstancesLoaded,
}

impl DiscoveryState {
    pub fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::ModeKnown)
                | (Self::ModeKnown, Self::StandaloneReady | Self::DomainHostsLoaded)
                | (Self::DomainHostsLoaded, Self::DomainInstancesLoaded)
        )
    }

    /// `true` once discovery has nothing left to do.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::StandaloneReady | Self::DomainInstancesLoaded)
    }

    pub(crate) fn advance(&mut self, next: Self) {
        debug_assert!(
            self.can_advance_to(next),
            "invalid discovery transition {self} -> {next}"
        );
        trace!(from = %self, to = %next, "discovery");
        *self = next;
    }
}

/// Everything discovery learned about the controller.
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    /// Server name (standalone) or domain name.
    pub name: String,
    #[serde(serialize_with = "serialize_launch_type")]
    pub launch_type: LaunchType,
    pub product: ProductInfo,
    /// Name of the domain controller's own host; domain mode only.
    pub local_host_name: Option<String>,
    pub system_properties: Vec<SystemProperty>,
    pub hosts: Vec<Host>,
}

impl Topology {
    pub fn is_domain(&self) -> bool {
        self.launch_type.is_domain()
    }

    /// All instances, host by host in discovery order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.hosts.iter().flat_map(|h| h.instances.iter())
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.name == name)
    }

    pub fn instance(&self, host: &str, server: &str) -> Option<&Instance> {
        self.host(host)?.instances.iter().find(|i| i.name == server)
    }
}

fn serialize_launch_type<S: serde::Serializer>(
    launch_type: &LaunchType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(launch_type)
}
