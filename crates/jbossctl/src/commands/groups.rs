//! Server group command handlers.

use tabled::Tabled;

use jbossctl_core::{Controller, GroupRef, ServerGroup};

use crate::cli::{GlobalOpts, GroupsArgs, GroupsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Socket Bindings")]
    sockets: String,
    #[tabled(rename = "Port Offset")]
    offset: i64,
    #[tabled(rename = "Deployments")]
    deployments: usize,
    #[tabled(rename = "Instances")]
    instances: usize,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: GroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GroupsCommand::List => {
            let groups = controller.server_groups().await?;
            let out = output::render_list(
                &global.output,
                &groups,
                |g: &ServerGroup| GroupRow {
                    name: g.name.clone(),
                    profile: util::or_dash(g.profile.as_deref()),
                    sockets: util::or_dash(g.socket_binding_group.as_deref()),
                    offset: g.socket_binding_port_offset,
                    deployments: g.deployments.len(),
                    instances: controller
                        .instances()
                        .filter(|i| i.server_group == g.name)
                        .count(),
                },
                |g| g.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Start { group } => {
            controller
                .start_servers(group.as_deref().map(GroupRef::Name))
                .await?;
            output::print_done(&request_message("Start", group.as_deref()), global.quiet);
            Ok(())
        }

        GroupsCommand::Stop { group } => {
            let target = group.as_deref().unwrap_or("every server group");
            if !util::confirm(&format!("Stop all servers of {target}?"), global)? {
                return Ok(());
            }
            controller
                .stop_servers(group.as_deref().map(GroupRef::Name))
                .await?;
            output::print_done(&request_message("Stop", group.as_deref()), global.quiet);
            Ok(())
        }
    }
}

fn request_message(action: &str, group: Option<&str>) -> String {
    match group {
        Some(group) => format!("{action} requested for server group '{group}'"),
        None => format!("{action} requested for every server group"),
    }
}
