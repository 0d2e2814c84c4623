// ── Host domain type ──

use serde::{Deserialize, Serialize};

use super::instance::Instance;

/// Product and release metadata reported by a host or the controller root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_name: Option<String>,
    pub product_version: Option<String>,
    pub release_codename: Option<String>,
    pub release_version: Option<String>,
}

/// A host: the domain controller's own host, a host controller, or the
/// single synthetic host standing in for a standalone server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub product: ProductInfo,
    /// `true` for the domain controller's host and for a standalone server.
    pub master: bool,
    /// `host-state`, when the server reports one.
    pub state: Option<String>,
    /// Always empty on a master host.
    pub instances: Vec<Instance>,
}

impl Host {
    /// Number of instances currently started.
    pub fn running_count(&self) -> usize {
        self.instances.iter().filter(|i| i.running()).count()
    }
}
