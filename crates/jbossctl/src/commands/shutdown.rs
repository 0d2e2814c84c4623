//! Whole-server shutdown.

use jbossctl_core::Controller;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    controller: &Controller,
    restart: bool,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let verb = if restart { "Restart" } else { "Shut down" };
    let what = if controller.is_domain() {
        format!("the domain controller '{}'", controller.name())
    } else {
        format!("server '{}'", controller.name())
    };
    if !util::confirm(&format!("{verb} {what}?"), global)? {
        return Ok(());
    }

    if restart {
        controller.restart(None).await?;
    } else {
        controller.shutdown().await?;
    }
    output::print_done(&format!("{verb} requested for {what}"), global.quiet);
    Ok(())
}
