// JVM and server runtime reads.

use jbossctl_api::models::MemoryRecord;
use jbossctl_api::{Transport, catalog};
use serde_json::Value;

use super::Controller;
use crate::error::CoreError;
use crate::model::{HeapUsage, Instance};

/// `server-state` value of a server that is up and needs nothing.
const RUNNING: &str = "running";

impl<T: Transport> Controller<T> {
    /// Heap usage of `instance` (or of the server at the root), in GiB.
    ///
    /// A successful reply without `heap-memory-usage` is a protocol error.
    pub async fn heap_usage(&self, instance: Option<&Instance>) -> Result<HeapUsage, CoreError> {
        let op = catalog::memory(self.instance_prefix(instance));
        let result = self.invoke(&op).await?;
        heap_from_result(result)
    }

    /// `server-state`, e.g. `running` or `reload-required`.
    pub async fn server_state(&self, instance: Option<&Instance>) -> Result<String, CoreError> {
        let op = catalog::server_state(self.instance_prefix(instance));
        self.invoke_as(&op, "server-state").await
    }

    /// `true` when `server-state` is `running`.
    pub async fn is_server_running(&self, instance: Option<&Instance>) -> Result<bool, CoreError> {
        Ok(self.server_state(instance).await? == RUNNING)
    }
}

fn heap_from_result(result: Value) -> Result<HeapUsage, CoreError> {
    let record: MemoryRecord = jbossctl_api::client::decode(result.clone(), "memory")?;
    let heap = record.heap_memory_usage.ok_or_else(|| CoreError::Cli {
        message: "Unexpected payload for memory: heap-memory-usage is missing".into(),
        raw: result,
    })?;
    Ok(HeapUsage::from_bytes(heap.used, heap.max))
}
