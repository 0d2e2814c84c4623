// ── Domain model ──
//
// Point-in-time snapshots of management resources. Back-references
// (instance → host, deployment → server group) are stored as names and
// resolved through the controller when an address is needed.

pub mod datasource;
pub mod deployment;
pub mod host;
pub mod instance;
pub mod listing;
pub mod memory;
pub mod server_group;
pub mod system_property;

// ── Re-exports ──────────────────────────────────────────────────────

pub use datasource::{DataSource, PoolStatistics};
pub use deployment::Deployment;
pub use host::{Host, ProductInfo};
pub use instance::{Instance, ServerStatus};
pub use listing::Listing;
pub use memory::HeapUsage;
pub use server_group::{GroupRef, ServerGroup};
pub use system_property::SystemProperty;
