//! Host command handlers.

use tabled::Tabled;

use jbossctl_core::{Controller, Host};

use crate::cli::{GlobalOpts, HostsArgs, HostsCommand};
use crate::error::CliError;
use crate::output;

use super::util::or_dash;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct HostRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Master")]
    master: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Instances")]
    instances: String,
}

impl From<&Host> for HostRow {
    fn from(h: &Host) -> Self {
        Self {
            name: h.name.clone(),
            master: if h.master { "yes".into() } else { String::new() },
            state: or_dash(h.state.as_deref()),
            product: format!(
                "{} {}",
                h.product.product_name.as_deref().unwrap_or(""),
                h.product.product_version.as_deref().unwrap_or("")
            )
            .trim()
            .to_owned(),
            instances: format!("{}/{}", h.running_count(), h.instances.len()),
        }
    }
}

#[derive(Tabled)]
struct ServerRow {
    #[tabled(rename = "Server")]
    name: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: HostsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HostsCommand::List => {
            let out = output::render_list(
                &global.output,
                controller.hosts(),
                |h| HostRow::from(h),
                |h| h.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HostsCommand::Servers { host } => {
            controller.find_host(&host)?;
            let listing = controller.server_names(&host).await;
            if let Some(err) = listing.error() {
                if !global.quiet {
                    eprintln!("warning: {err}");
                }
            }
            let names = listing.into_items();
            let out = output::render_list(
                &global.output,
                &names,
                |n| ServerRow { name: n.clone() },
                String::clone,
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
