// jbossctl-core: Topology discovery and typed operations over jbossctl-api.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod topology;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, Credentials};
pub use controller::Controller;
pub use error::CoreError;
pub use topology::{DiscoveryState, Topology};

pub use jbossctl_api::LaunchType;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    DataSource, Deployment, GroupRef, HeapUsage, Host, Instance, Listing, PoolStatistics,
    ProductInfo, ServerGroup, ServerStatus, SystemProperty,
};
