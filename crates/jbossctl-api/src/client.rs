// Management API client
//
// Thin layer over a `Transport`: serializes an `Operation`, sends it, and
// runs the reply through the envelope interpreter. Typed decoding of the
// `result` payload lives here too so every caller reports shape mismatches
// the same way.

use secrecy::SecretString;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::envelope;
use crate::error::Error;
use crate::operation::Operation;
use crate::transport::{HttpTransport, Transport, TransportConfig};

/// Client for the `/management` endpoint.
///
/// One request per call, awaited to completion. Errors propagate unchanged;
/// nothing is retried.
pub struct ManagementClient<T = HttpTransport> {
    transport: T,
}

impl ManagementClient<HttpTransport> {
    /// Build an HTTP-backed client for `controller` (`host:port`).
    pub fn connect(
        controller: &str,
        username: impl Into<String>,
        password: SecretString,
        config: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self::new(HttpTransport::new(
            controller, username, password, config,
        )?))
    }
}

impl<T: Transport> ManagementClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `operation` and return the `result` payload of a successful
    /// envelope.
    pub async fn invoke(&self, operation: &Operation) -> Result<Value, Error> {
        debug!(
            operation = operation.name(),
            address = %operation.address(),
            "invoke"
        );
        let body = serde_json::to_string(operation)
            .map_err(|e| Error::cli(format!("Unserializable operation: {e}"), Value::Null))?;
        let response = self.transport.post(body).await?;
        envelope::interpret(response)
    }

    /// Like [`invoke`](Self::invoke), decoding the result into `R`.
    ///
    /// `what` names the payload in the error message when the result does
    /// not have the expected shape.
    pub async fn invoke_as<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        what: &str,
    ) -> Result<R, Error> {
        let value = self.invoke(operation).await?;
        decode(value, what)
    }
}

/// Decode a `result` payload, reporting a mismatch as a protocol error.
pub fn decode<R: DeserializeOwned>(value: Value, what: &str) -> Result<R, Error> {
    R::deserialize(&value).map_err(|e| Error::cli(format!("Unexpected payload for {what}: {e}"), value))
}
