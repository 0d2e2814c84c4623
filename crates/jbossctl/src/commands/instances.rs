//! Server instance command handlers.

use serde::Serialize;
use tabled::Tabled;

use jbossctl_core::{Controller, Instance};

use crate::cli::{GlobalOpts, InstanceArgs, InstancesArgs, InstancesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Server")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl InstanceRow {
    fn new(i: &Instance, color: bool) -> Self {
        Self {
            host: i.host.clone(),
            name: i.name.clone(),
            group: i.server_group.clone(),
            status: output::paint_status(i.status, color),
        }
    }
}

#[derive(Serialize)]
struct ServerState<'a> {
    host: Option<&'a str>,
    server: Option<&'a str>,
    state: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: InstancesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InstancesCommand::List => {
            let color = output::should_color(&global.color);
            let instances: Vec<&Instance> = controller.instances().collect();
            let out = output::render_list(
                &global.output,
                &instances,
                |i| InstanceRow::new(i, color),
                ToString::to_string,
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InstancesCommand::Start(target) => {
            let instance = find_in_domain(controller, &target, "start")?;
            controller.start_server(instance).await?;
            output::print_done(&format!("Start requested for {instance}"), global.quiet);
            Ok(())
        }

        InstancesCommand::Stop(target) => {
            let instance = find_in_domain(controller, &target, "stop")?;
            if !util::confirm(&format!("Stop {instance}?"), global)? {
                return Ok(());
            }
            controller.stop_server(instance).await?;
            output::print_done(&format!("Stop requested for {instance}"), global.quiet);
            Ok(())
        }

        InstancesCommand::Restart(target) => {
            let instance = if controller.is_domain() {
                Some(find(controller, &target)?)
            } else {
                None
            };
            let label = instance.map_or_else(|| controller.name().to_owned(), ToString::to_string);
            if !util::confirm(&format!("Restart {label}?"), global)? {
                return Ok(());
            }
            controller.restart(instance).await?;
            output::print_done(&format!("Restart requested for {label}"), global.quiet);
            Ok(())
        }

        InstancesCommand::State(target) => {
            let instance = util::resolve_target(controller, &target)?;
            let state = ServerState {
                host: instance.map(|i| i.host.as_str()),
                server: instance.map(|i| i.name.as_str()),
                state: controller.server_state(instance).await?,
            };
            let out =
                output::render_single(&global.output, &state, |s| s.state.clone(), |s| {
                    s.state.clone()
                })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn find<'c>(controller: &'c Controller, target: &InstanceArgs) -> Result<&'c Instance, CliError> {
    Ok(controller.find_instance(&target.host, &target.server)?)
}

/// Like [`find`], but a standalone server reports the operation as
/// unsupported rather than the instance as missing.
fn find_in_domain<'c>(
    controller: &'c Controller,
    target: &InstanceArgs,
    operation: &str,
) -> Result<&'c Instance, CliError> {
    if !controller.is_domain() {
        return Err(CliError::Unsupported {
            operation: operation.into(),
            mode: controller.launch_type().to_string(),
        });
    }
    find(controller, target)
}
