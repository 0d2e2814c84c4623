//! Command dispatch: bridges CLI args -> controller operations -> output.

pub mod config_cmd;
pub mod datasources;
pub mod deployments;
pub mod groups;
pub mod hosts;
pub mod info;
pub mod instances;
pub mod memory;
pub mod properties;
pub mod shutdown;
pub mod util;

use jbossctl_core::Controller;

use crate::cli::{Command, GlobalOpts, PropertiesCommand};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Info => info::handle(controller, global),
        Command::Hosts(args) => hosts::handle(controller, args, global).await,
        Command::Instances(args) => instances::handle(controller, args, global).await,
        Command::Groups(args) => groups::handle(controller, args, global).await,
        Command::Deployments(args) => deployments::handle(controller, args, global).await,
        Command::Datasources(args) => datasources::handle(controller, args, global).await,
        Command::Memory(target) => memory::handle(controller, &target, global).await,
        Command::Properties(args) => match args.command {
            PropertiesCommand::List => properties::handle(controller, global),
        },
        Command::Shutdown { restart } => shutdown::handle(controller, restart, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
