//! System properties.

use tabled::Tabled;

use jbossctl_core::{Controller, SystemProperty};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Boot Time")]
    boot_time: String,
}

impl From<&SystemProperty> for PropertyRow {
    fn from(p: &SystemProperty) -> Self {
        Self {
            name: p.name.clone(),
            value: p.value.clone(),
            boot_time: if p.boot_time { "yes".into() } else { String::new() },
        }
    }
}

pub fn handle(controller: &Controller, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.output,
        controller.system_properties(),
        |p| PropertyRow::from(p),
        ToString::to_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
