// jbossctl-api: Async Rust client for the JBoss/WildFly HTTP management API

pub mod address;
pub mod catalog;
pub mod client;
pub mod digest;
pub mod envelope;
pub mod error;
pub mod models;
pub mod operation;
pub mod transport;

pub use address::{Address, LaunchType, Scope};
pub use client::ManagementClient;
pub use error::Error;
pub use operation::Operation;
pub use transport::{HttpTransport, RawResponse, Transport, TransportConfig};
