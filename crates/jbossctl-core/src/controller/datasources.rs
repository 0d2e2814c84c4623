// Datasource reads and pool maintenance.

use serde_json::Value;

use jbossctl_api::models::{Attribute, Children, DataSourceRecord};
use jbossctl_api::{Transport, catalog};

use super::Controller;
use crate::convert;
use crate::error::CoreError;
use crate::model::{DataSource, Instance};

impl<T: Transport> Controller<T> {
    /// Datasources of `instance` (or of the standalone server).
    ///
    /// `with_statistics` reads runtime attributes recursively so pool
    /// counters are filled in where the server collects them.
    pub async fn datasources(
        &self,
        instance: Option<&Instance>,
        with_statistics: bool,
    ) -> Result<Vec<DataSource>, CoreError> {
        let op = catalog::datasources(self.instance_prefix(instance), with_statistics);
        let records: Option<Children<DataSourceRecord>> =
            self.invoke_as(&op, "datasources").await?;
        Ok(records
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, record)| {
                record.map(|r| convert::datasource_from_record(name, r))
            })
            .collect())
    }

    /// Like [`datasources`](Self::datasources), keeping only enabled ones.
    pub async fn enabled_datasources(
        &self,
        instance: Option<&Instance>,
        with_statistics: bool,
    ) -> Result<Vec<DataSource>, CoreError> {
        let mut list = self.datasources(instance, with_statistics).await?;
        list.retain(|ds| ds.enabled);
        Ok(list)
    }

    /// `flush-idle-connection-in-pool`; returns the server's acknowledgement.
    pub async fn flush_idle_connections(
        &self,
        datasource: &str,
        instance: Option<&Instance>,
    ) -> Result<Value, CoreError> {
        let op = catalog::flush_idle_connections(self.instance_prefix(instance), datasource);
        self.invoke(&op).await
    }

    /// `test-connection-in-pool`: whether a connection could be obtained.
    pub async fn test_connection(
        &self,
        datasource: &str,
        instance: Option<&Instance>,
    ) -> Result<bool, CoreError> {
        let op = catalog::test_connection(self.instance_prefix(instance), datasource);
        let result = self.invoke(&op).await?;
        connection_test_outcome(result)
    }

    /// The `enabled` attribute of one datasource.
    ///
    /// An expression answer resolves to its `${name:fallback}` default; one
    /// without a fallback is a `Cli` error.
    pub async fn datasource_enabled(
        &self,
        datasource: &str,
        instance: Option<&Instance>,
    ) -> Result<bool, CoreError> {
        let op = catalog::datasource_enabled(self.instance_prefix(instance), datasource);
        let attribute: Attribute<bool> = self.invoke_as(&op, "datasource enabled").await?;
        let expression = attribute.expression().unwrap_or_default().to_owned();
        attribute.literal_or_fallback().ok_or_else(|| CoreError::Cli {
            message: format!("Unresolved expression for datasource enabled: {expression}"),
            raw: Value::String(expression),
        })
    }
}

/// Servers answer `[true]`, a bare boolean, or nothing at all on success.
fn connection_test_outcome(result: Value) -> Result<bool, CoreError> {
    let outcome = match &result {
        Value::Null => Some(true),
        Value::Bool(ok) => Some(*ok),
        Value::Array(items) => match items.first() {
            None => Some(true),
            Some(Value::Bool(ok)) => Some(*ok),
            Some(_) => None,
        },
        _ => None,
    };
    outcome.ok_or_else(|| unexpected_test_result(result))
}

fn unexpected_test_result(result: Value) -> CoreError {
    CoreError::Cli {
        message: format!("Unexpected payload for test-connection-in-pool: {result}"),
        raw: result,
    }
}
