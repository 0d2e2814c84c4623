// ── Server group domain types ──

use serde::{Deserialize, Serialize};

use super::deployment::Deployment;

/// Domain-mode unit binding servers to a profile and a deployment set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerGroup {
    pub name: String,
    pub profile: Option<String>,
    pub socket_binding_group: Option<String>,
    pub socket_binding_port_offset: i64,
    /// Assigned deployments, in server order.
    pub deployments: Vec<Deployment>,
}

/// A server group given either as a resolved value or by name.
#[derive(Debug, Clone, Copy)]
pub enum GroupRef<'a> {
    Group(&'a ServerGroup),
    Name(&'a str),
}

impl<'a> GroupRef<'a> {
    pub fn name(self) -> &'a str {
        match self {
            Self::Group(group) => &group.name,
            Self::Name(name) => name,
        }
    }
}

impl<'a> From<&'a ServerGroup> for GroupRef<'a> {
    fn from(group: &'a ServerGroup) -> Self {
        Self::Group(group)
    }
}

impl<'a> From<&'a str> for GroupRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}
