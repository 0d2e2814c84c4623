//! Deployment command handlers.

use serde::Serialize;
use tabled::Tabled;

use jbossctl_core::{Controller, Deployment, GroupRef};

use crate::cli::{DeploymentsArgs, DeploymentsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::or_dash;

// ── Views ───────────────────────────────────────────────────────────

/// A deployment plus its context root, when one was looked up.
#[derive(Serialize)]
struct DeploymentView {
    #[serde(flatten)]
    deployment: Deployment,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_root: Option<String>,
}

#[derive(Tabled)]
struct DeploymentRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Runtime Name")]
    runtime_name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Server Group")]
    group: String,
    #[tabled(rename = "Context Root")]
    context_root: String,
}

impl DeploymentRow {
    fn new(v: &DeploymentView, color: bool) -> Self {
        let d = &v.deployment;
        Self {
            name: d.name.clone(),
            runtime_name: d.runtime_name.clone(),
            state: output::paint_enabled(d.enabled, color),
            group: or_dash(d.server_group.as_deref()),
            context_root: or_dash(v.context_root.as_deref()),
        }
    }
}

#[derive(Serialize)]
struct ContextRootView<'a> {
    name: &'a str,
    context_root: Option<String>,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: DeploymentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DeploymentsCommand::List {
            group,
            assigned,
            context_roots,
        } => {
            let deployments = match group.as_deref() {
                Some(group) => {
                    controller
                        .assigned_deployments(Some(GroupRef::Name(group)))
                        .await?
                }
                None if assigned => controller.assigned_deployments(None).await?,
                None => controller.deployments().await?,
            };

            let mut views = Vec::with_capacity(deployments.len());
            for deployment in deployments {
                let context_root = if context_roots {
                    controller.context_root(&deployment).await
                } else {
                    None
                };
                views.push(DeploymentView {
                    deployment,
                    context_root,
                });
            }

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &views,
                |v| DeploymentRow::new(v, color),
                |v| v.deployment.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeploymentsCommand::ContextRoot { name } => {
            let deployment = controller
                .deployments()
                .await?
                .into_iter()
                .find(|d| d.name == name)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "Deployment".into(),
                    identifier: name.clone(),
                    list_command: "deployments list".into(),
                })?;

            let view = ContextRootView {
                name: &deployment.name,
                context_root: controller.context_root(&deployment).await,
            };
            let out = output::render_single(
                &global.output,
                &view,
                |v| or_dash(v.context_root.as_deref()),
                |v| v.context_root.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
