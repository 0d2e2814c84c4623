//! Heap usage.

use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use jbossctl_core::{Controller, HeapUsage, Instance};

use crate::cli::{GlobalOpts, TargetArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct HeapView {
    /// `host/server`, or the standalone server name.
    target: String,
    #[serde(flatten)]
    heap: HeapUsage,
}

#[derive(Tabled)]
struct HeapRow {
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Used (GiB)")]
    used: String,
    #[tabled(rename = "Max (GiB)")]
    max: String,
    #[tabled(rename = "Usage")]
    ratio: String,
}

impl From<&HeapView> for HeapRow {
    fn from(v: &HeapView) -> Self {
        Self {
            target: v.target.clone(),
            used: format!("{:.2}", v.heap.used),
            max: if v.heap.max < 0.0 {
                "unlimited".into()
            } else {
                format!("{:.2}", v.heap.max)
            },
            ratio: v
                .heap
                .ratio()
                .map_or_else(|| "-".into(), |r| format!("{:.0}%", r * 100.0)),
        }
    }
}

pub async fn handle(
    controller: &Controller,
    target: &TargetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let views = match util::resolve_target(controller, target)? {
        Some(instance) => vec![read(controller, Some(instance)).await?],
        None if controller.is_domain() => {
            let mut views = Vec::new();
            for instance in controller.instances().filter(|i| i.running()) {
                // One unreachable instance shouldn't hide the others.
                match read(controller, Some(instance)).await {
                    Ok(view) => views.push(view),
                    Err(e) => warn!(%instance, error = %e, "could not read heap usage"),
                }
            }
            views
        }
        None => vec![read(controller, None).await?],
    };

    let out = output::render_list(
        &global.output,
        &views,
        |v| HeapRow::from(v),
        |v| format!("{} {:.2}/{:.2}", v.target, v.heap.used, v.heap.max),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

async fn read(controller: &Controller, instance: Option<&Instance>) -> Result<HeapView, CliError> {
    let heap = controller.heap_usage(instance).await?;
    Ok(HeapView {
        target: instance.map_or_else(|| controller.name().to_owned(), ToString::to_string),
        heap,
    })
}
