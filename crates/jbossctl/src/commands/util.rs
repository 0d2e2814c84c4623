//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use jbossctl_core::{Controller, ControllerConfig, Instance};

use crate::cli::{GlobalOpts, TargetArgs};
use crate::error::CliError;

/// Connect and run discovery, with a spinner on interactive terminals.
pub async fn connect(
    config: &ControllerConfig,
    global: &GlobalOpts,
) -> Result<Controller, CliError> {
    let spinner = (!global.quiet && std::io::stderr().is_terminal())
        .then(|| spinner(&format!("Connecting to {}", config.controller)));

    let result = Controller::connect(config).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    Ok(result?)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Resolve `--host/--server` to a discovered instance.
///
/// A standalone server has no instances: the flags are ignored there.
pub fn resolve_target<'c>(
    controller: &'c Controller,
    target: &TargetArgs,
) -> Result<Option<&'c Instance>, CliError> {
    let (Some(host), Some(server)) = (&target.host, &target.server) else {
        return Ok(None);
    };
    if !controller.is_domain() {
        warn!(host, server, "standalone server: ignoring --host/--server");
        return Ok(None);
    }
    Ok(Some(controller.find_instance(host, server)?))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to ask on, the action is refused.
pub fn confirm(message: &str, global: &GlobalOpts) -> Result<bool, CliError> {
    if global.yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// "-" for missing values in tables.
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}
