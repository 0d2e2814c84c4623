//! Controller summary.

use jbossctl_core::{Controller, Topology};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util::or_dash;

fn detail(t: &Topology) -> String {
    let running = t.instances().filter(|i| i.running()).count();
    output::detail_lines(&[
        ("Name", or_dash(Some(&t.name))),
        ("Mode", t.launch_type.to_string()),
        ("Product", or_dash(t.product.product_name.as_deref())),
        ("Version", or_dash(t.product.product_version.as_deref())),
        ("Release", or_dash(t.product.release_version.as_deref())),
        ("Codename", or_dash(t.product.release_codename.as_deref())),
        ("Local host", or_dash(t.local_host_name.as_deref())),
        ("Hosts", t.hosts.len().to_string()),
        (
            "Instances",
            format!("{} ({running} running)", t.instances().count()),
        ),
    ])
}

pub fn handle(controller: &Controller, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.output, controller.topology(), detail, |t| {
        t.launch_type.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
