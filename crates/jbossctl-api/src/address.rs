// Resource addresses and scope resolution
//
// A management address is an ordered list of `(type, name)` segments,
// serialized on the wire as a flat array: `["host", "h1", "server", "s1"]`.
// `Scope::prefix` decides which prefix an operation gets from the
// controller's launch type.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use strum::{Display, EnumString};

/// Topology mode announced by the controller's `launch-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum LaunchType {
    #[strum(serialize = "STANDALONE")]
    Standalone,
    #[strum(serialize = "DOMAIN")]
    Domain,
}

impl LaunchType {
    pub fn is_domain(self) -> bool {
        self == Self::Domain
    }
}

/// Ordered resource path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    segments: Vec<(String, String)>,
}

impl Address {
    /// The root of the server (or of the domain controller).
    pub fn root() -> Self {
        Self::default()
    }

    /// Append one `(type, name)` segment.
    pub fn child(mut self, kind: impl Into<String>, name: impl Into<String>) -> Self {
        self.segments.push((kind.into(), name.into()));
        self
    }

    /// Append every segment of `suffix`.
    pub fn join(mut self, suffix: Address) -> Self {
        self.segments.extend(suffix.segments);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[(String, String)] {
        &self.segments
    }

    /// Flattened wire form: `type, name, type, name, ...`.
    pub fn to_path(&self) -> Vec<&str> {
        self.segments
            .iter()
            .flat_map(|(kind, name)| [kind.as_str(), name.as_str()])
            .collect()
    }

    // ── Resource suffixes ────────────────────────────────────────────

    /// `core-service=platform-mbean/type=memory`
    pub fn memory() -> Self {
        Self::root()
            .child("core-service", "platform-mbean")
            .child("type", "memory")
    }

    /// `subsystem=datasources`
    pub fn datasources() -> Self {
        Self::root().child("subsystem", "datasources")
    }

    /// `subsystem=datasources/data-source={name}`
    pub fn data_source(name: &str) -> Self {
        Self::datasources().child("data-source", name)
    }

    /// `deployment={name}/subsystem=web`
    pub fn deployment_web(name: &str) -> Self {
        Self::root()
            .child("deployment", name)
            .child("subsystem", "web")
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.segments.len() * 2))?;
        for (kind, name) in &self.segments {
            seq.serialize_element(kind)?;
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

/// CLI-style rendering: `/host=h1/server=s1`, or `/` for the root.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for (kind, name) in &self.segments {
            write!(f, "/{kind}={name}")?;
        }
        Ok(())
    }
}

/// Where an operation applies, before the launch type is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// The server root (standalone) or the domain root.
    Root,
    /// A running server instance on a host: `host=h/server=s`.
    Server { host: &'a str, server: &'a str },
    /// A server's configuration on its host, used for lifecycle
    /// operations: `host=h/server-config=s`.
    ServerConfig { host: &'a str, server: &'a str },
    /// `server-group=g`
    ServerGroup(&'a str),
    /// `host=h`
    Host(&'a str),
}

impl Scope<'_> {
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Resolve the address prefix for this scope.
    ///
    /// A standalone server has no host/group hierarchy, so every scope
    /// collapses to the empty prefix there.
    pub fn prefix(self, launch_type: LaunchType) -> Address {
        if launch_type == LaunchType::Standalone {
            return Address::root();
        }

        match self {
            Self::Root => Address::root(),
            Self::Server { host, server } => Address::root()
                .child("host", host)
                .child("server", server),
            Self::ServerConfig { host, server } => Address::root()
                .child("host", host)
                .child("server-config", server),
            Self::ServerGroup(group) => Address::root().child("server-group", group),
            Self::Host(host) => Address::root().child("host", host),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const ALL_SCOPES: [Scope<'static>; 5] = [
        Scope::Root,
        Scope::Server {
            host: "h1",
            server: "s1",
        },
        Scope::ServerConfig {
            host: "h1",
            server: "s1",
        },
        Scope::ServerGroup("g1"),
        Scope::Host("h1"),
    ];

    #[test]
    fn standalone_prefix_is_always_empty() {
        for scope in ALL_SCOPES {
            assert!(scope.prefix(LaunchType::Standalone).is_empty(), "{scope:?}");
        }
    }

    #[test]
    fn domain_server_prefix() {
        let prefix = Scope::Server {
            host: "master",
            server: "server-one",
        }
        .prefix(LaunchType::Domain);
        assert_eq!(prefix.to_path(), ["host", "master", "server", "server-one"]);
    }

    #[test]
    fn domain_prefix_followed_by_suffix() {
        let address = Scope::Server {
            host: "h",
            server: "s",
        }
        .prefix(LaunchType::Domain)
        .join(Address::memory());
        assert_eq!(
            address.to_path(),
            [
                "host",
                "h",
                "server",
                "s",
                "core-service",
                "platform-mbean",
                "type",
                "memory"
            ]
        );
    }

    #[test]
    fn domain_group_host_and_config_prefixes() {
        assert_eq!(
            Scope::ServerGroup("main-server-group")
                .prefix(LaunchType::Domain)
                .to_path(),
            ["server-group", "main-server-group"]
        );
        assert_eq!(
            Scope::Host("slave").prefix(LaunchType::Domain).to_path(),
            ["host", "slave"]
        );
        assert_eq!(
            Scope::ServerConfig {
                host: "slave",
                server: "s1"
            }
            .prefix(LaunchType::Domain)
            .to_path(),
            ["host", "slave", "server-config", "s1"]
        );
        assert!(Scope::Root.prefix(LaunchType::Domain).is_empty());
    }

    #[test]
    fn serializes_as_flat_array() {
        let address = Address::data_source("ExampleDS");
        assert_eq!(
            serde_json::to_value(&address).expect("serialize"),
            json!(["subsystem", "datasources", "data-source", "ExampleDS"])
        );
    }

    #[test]
    fn display_uses_cli_notation() {
        assert_eq!(Address::root().to_string(), "/");
        assert_eq!(
            Address::deployment_web("app.war").to_string(),
            "/deployment=app.war/subsystem=web"
        );
    }

    #[test]
    fn launch_type_parses_wire_values() {
        assert_eq!("DOMAIN".parse::<LaunchType>().ok(), Some(LaunchType::Domain));
        assert_eq!(
            "STANDALONE".parse::<LaunchType>().ok(),
            Some(LaunchType::Standalone)
        );
        assert!("CLUSTER".parse::<LaunchType>().is_err());
        assert_eq!(LaunchType::Domain.to_string(), "DOMAIN");
    }
}
