//! CLI configuration: a thin wrapper around `jbossctl_config`.
//!
//! Re-exports the shared types and adds resolution that respects the
//! `GlobalOpts` flag overrides (--controller, --auth, --timeout).

use std::time::Duration;

use jbossctl_core::{ControllerConfig, Credentials};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use jbossctl_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `ControllerConfig` for this invocation.
///
/// Flags win over the profile; without a profile both `--controller` and
/// `--auth` must be given.
pub fn build_controller_config(global: &GlobalOpts) -> Result<ControllerConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    match cfg.profiles.get(&profile_name) {
        Some(profile) => resolve_profile(profile, &profile_name, &cfg.defaults, global),
        None if global.profile.is_some() => Err(CliError::profile_not_found(
            profile_name,
            cfg.profiles.keys(),
        )),
        None => from_flags(global, &profile_name, &cfg.defaults),
    }
}

/// Translate a `Profile` + global flags into a `ControllerConfig`.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ControllerConfig, CliError> {
    // 1. Endpoint (flag > env > profile)
    let controller = global
        .controller
        .clone()
        .unwrap_or_else(|| profile.controller.clone());
    jbossctl_config::validate_controller(&controller)?;

    // 2. Credentials (flag > profile chain)
    let credentials = match global.auth.as_deref() {
        Some(auth) => parse_auth(auth)?,
        None => jbossctl_config::resolve_credentials(profile, profile_name)?,
    };

    // 3. Timeout (flag > profile > defaults)
    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(defaults.timeout);

    Ok(ControllerConfig {
        controller,
        credentials,
        timeout: Duration::from_secs(timeout),
    })
}

fn from_flags(
    global: &GlobalOpts,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ControllerConfig, CliError> {
    let controller = global.controller.clone().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    jbossctl_config::validate_controller(&controller)?;

    let auth = global.auth.as_deref().ok_or_else(|| CliError::NoCredentials {
        profile: profile_name.into(),
    })?;

    Ok(ControllerConfig {
        controller,
        credentials: parse_auth(auth)?,
        timeout: Duration::from_secs(global.timeout.unwrap_or(defaults.timeout)),
    })
}

fn parse_auth(auth: &str) -> Result<Credentials, CliError> {
    Credentials::parse(auth).map_err(|e| CliError::Validation {
        field: "auth".into(),
        reason: e.to_string(),
    })
}
