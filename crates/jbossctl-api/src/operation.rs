// Structured management operations
//
// An operation is serialized as a single JSON object:
// `{ "operation": <name>, "address": [...], <param>: <value>, ... }`.
// The `address` key is omitted for the root, which the server reads as
// "this server's root".

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::address::Address;

/// A management operation: name, target address, and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    name: String,
    address: Address,
    params: Map<String, Value>,
}

impl Operation {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
            params: Map::new(),
        }
    }

    /// Attach an operation-specific parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    // ── Generic operations ───────────────────────────────────────────

    pub fn read_resource(address: Address) -> Self {
        Self::new("read-resource", address)
    }

    pub fn read_attribute(address: Address, attribute: &str) -> Self {
        Self::new("read-attribute", address).param("name", attribute)
    }

    pub fn read_children_names(address: Address, child_type: &str) -> Self {
        Self::new("read-children-names", address).param("child-type", child_type)
    }

    pub fn read_children_resources(address: Address, child_type: &str) -> Self {
        Self::new("read-children-resources", address).param("child-type", child_type)
    }

    // ── Common parameters ────────────────────────────────────────────

    /// `"include-runtime": true`
    pub fn include_runtime(self) -> Self {
        self.param("include-runtime", true)
    }

    /// `"recursive": true`
    pub fn recursive(self) -> Self {
        self.param("recursive", true)
    }

    /// `"recursive-depth": depth`
    pub fn recursive_depth(self, depth: u32) -> Self {
        self.param("recursive-depth", depth)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let address_len = usize::from(!self.address.is_empty());
        let mut map = serializer.serialize_map(Some(1 + address_len + self.params.len()))?;
        map.serialize_entry("operation", &self.name)?;
        if !self.address.is_empty() {
            map.serialize_entry("address", &self.address)?;
        }
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
