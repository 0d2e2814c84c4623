//! Datasource command handlers.

use serde::Serialize;
use tabled::Tabled;

use jbossctl_core::{Controller, DataSource};

use crate::cli::{DatasourcesArgs, DatasourcesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::{self, or_dash};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DataSourceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "JNDI Name")]
    jndi_name: String,
    #[tabled(rename = "Driver")]
    driver: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Connection URL")]
    url: String,
}

impl DataSourceRow {
    fn new(ds: &DataSource, color: bool) -> Self {
        Self {
            name: ds.name.clone(),
            jndi_name: or_dash(ds.jndi_name.as_deref()),
            driver: or_dash(ds.driver_name.as_deref()),
            state: output::paint_enabled(ds.enabled, color),
            pool: pool_bounds(ds),
            url: or_dash(ds.connection_url.as_deref()),
        }
    }
}

#[derive(Tabled)]
struct PoolStatisticsRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "In Use")]
    in_use: String,
    #[tabled(rename = "Max Used")]
    max_used: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Destroyed")]
    destroyed: String,
    #[tabled(rename = "Max Wait (ms)")]
    max_wait: String,
}

impl From<&DataSource> for PoolStatisticsRow {
    fn from(ds: &DataSource) -> Self {
        let stat = |f: fn(&jbossctl_core::PoolStatistics) -> u64| {
            ds.statistics
                .as_ref()
                .map_or_else(|| "-".into(), |s| f(s).to_string())
        };
        Self {
            name: ds.name.clone(),
            active: stat(|s| s.active),
            available: stat(|s| s.available),
            in_use: stat(|s| s.in_use),
            max_used: stat(|s| s.max_used),
            created: stat(|s| s.created),
            destroyed: stat(|s| s.destroyed),
            max_wait: stat(|s| s.max_wait_time),
        }
    }
}

fn pool_bounds(ds: &DataSource) -> String {
    match (ds.min_pool_size, ds.max_pool_size) {
        (None, None) => "-".into(),
        (min, max) => format!(
            "{}..{}",
            min.map(|v| v.to_string()).unwrap_or_default(),
            max.map(|v| v.to_string()).unwrap_or_default()
        ),
    }
}

#[derive(Serialize)]
struct ConnectionTest<'a> {
    datasource: &'a str,
    ok: bool,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: DatasourcesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DatasourcesCommand::List { target, stats, all } => {
            let instance = util::resolve_target(controller, &target)?;
            let list = if all {
                controller.datasources(instance, stats).await?
            } else {
                controller.enabled_datasources(instance, stats).await?
            };

            let out = if stats {
                output::render_list(
                    &global.output,
                    &list,
                    |ds| PoolStatisticsRow::from(ds),
                    |ds| ds.name.clone(),
                )?
            } else {
                let color = output::should_color(&global.color);
                output::render_list(
                    &global.output,
                    &list,
                    |ds| DataSourceRow::new(ds, color),
                    |ds| ds.name.clone(),
                )?
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DatasourcesCommand::Flush { name, target } => {
            let instance = util::resolve_target(controller, &target)?;
            controller.flush_idle_connections(&name, instance).await?;
            output::print_done(&format!("Flushed idle connections of '{name}'"), global.quiet);
            Ok(())
        }

        DatasourcesCommand::Test { name, target } => {
            let instance = util::resolve_target(controller, &target)?;
            let result = ConnectionTest {
                datasource: &name,
                ok: controller.test_connection(&name, instance).await?,
            };
            let out = output::render_single(
                &global.output,
                &result,
                |r| {
                    if r.ok {
                        format!("Connection to '{}' succeeded", r.datasource)
                    } else {
                        format!("Connection to '{}' failed", r.datasource)
                    }
                },
                |r| r.ok.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if result.ok {
                Ok(())
            } else {
                Err(CliError::ManagementFailed {
                    message: format!("test-connection-in-pool failed for '{name}'"),
                })
            }
        }
    }
}
