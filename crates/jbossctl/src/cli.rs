//! Clap derive structures for the `jbossctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// jbossctl -- inspect and operate JBoss EAP / WildFly controllers
#[derive(Debug, Parser)]
#[command(
    name = "jbossctl",
    version,
    about = "Inspect and operate JBoss EAP / WildFly management controllers",
    long_about = "Talks to the HTTP management endpoint of a standalone server or a\n\
        domain controller. The topology (hosts, server instances, server groups)\n\
        is discovered on connect; every command then works in either mode.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "JBOSSCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Management endpoint as host:port (overrides profile)
    #[arg(long, short = 'c', env = "JBOSSCTL_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Management credentials as user:pass (overrides profile)
    #[arg(long, env = "JBOSSCTL_AUTH", global = true, hide_env_values = true)]
    pub auth: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "JBOSSCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "JBOSSCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Controller summary: mode, product and version
    Info,

    /// Discovered hosts
    Hosts(HostsArgs),

    /// Server instances and their lifecycle
    #[command(alias = "inst", alias = "i")]
    Instances(InstancesArgs),

    /// Server groups (domain mode)
    #[command(alias = "grp")]
    Groups(GroupsArgs),

    /// Deployments and context roots
    #[command(alias = "deploy", alias = "d")]
    Deployments(DeploymentsArgs),

    /// Datasources and connection pools
    #[command(alias = "ds")]
    Datasources(DatasourcesArgs),

    /// Heap usage (every running instance in domain mode)
    #[command(alias = "mem")]
    Memory(TargetArgs),

    /// System properties
    #[command(alias = "props")]
    Properties(PropertiesArgs),

    /// Shut the server (or the whole domain controller) down
    Shutdown {
        /// Restart after shutting down
        #[arg(long)]
        restart: bool,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Target Arguments ──────────────────────────────────────────

/// Optional server instance; omitted means the standalone server or the
/// domain root.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Host of the target instance (domain mode)
    #[arg(long, requires = "server")]
    pub host: Option<String>,

    /// Server name of the target instance (domain mode)
    #[arg(long, requires = "host")]
    pub server: Option<String>,
}

/// A required server instance.
#[derive(Debug, Args)]
pub struct InstanceArgs {
    /// Host of the instance
    #[arg(long)]
    pub host: String,

    /// Server name of the instance
    #[arg(long)]
    pub server: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOSTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HostsArgs {
    #[command(subcommand)]
    pub command: HostsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HostsCommand {
    /// List discovered hosts
    #[command(alias = "ls")]
    List,

    /// Names of the servers running on a host (domain mode)
    Servers {
        /// Host name
        host: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INSTANCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InstancesArgs {
    #[command(subcommand)]
    pub command: InstancesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstancesCommand {
    /// List server instances
    #[command(alias = "ls")]
    List,

    /// Start a server instance (domain mode)
    Start(InstanceArgs),

    /// Stop a server instance (domain mode)
    Stop(InstanceArgs),

    /// Restart a server instance
    Restart(InstanceArgs),

    /// Read the server-state attribute
    State(TargetArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVER GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// List server groups
    #[command(alias = "ls")]
    List,

    /// Start every server of a group (all groups when omitted)
    Start {
        /// Server group name
        group: Option<String>,
    },

    /// Stop every server of a group (all groups when omitted)
    Stop {
        /// Server group name
        group: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEPLOYMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DeploymentsArgs {
    #[command(subcommand)]
    pub command: DeploymentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DeploymentsCommand {
    /// List deployments with enablement and owning group
    #[command(alias = "ls")]
    List {
        /// Only deployments assigned to this server group
        #[arg(long, short = 'g', conflicts_with = "assigned")]
        group: Option<String>,

        /// Group assignments instead of the reconciled registry
        #[arg(long)]
        assigned: bool,

        /// Look up the context root of every web deployment
        #[arg(long)]
        context_roots: bool,
    },

    /// Context root of a web deployment
    ContextRoot {
        /// Deployment name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DATASOURCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DatasourcesArgs {
    #[command(subcommand)]
    pub command: DatasourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DatasourcesCommand {
    /// List datasources
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        target: TargetArgs,

        /// Include connection pool statistics
        #[arg(long)]
        stats: bool,

        /// Include disabled datasources
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Flush idle connections of a pool
    Flush {
        /// Datasource name
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Test that a pool can hand out a connection
    Test {
        /// Datasource name
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SYSTEM PROPERTIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PropertiesCommand {
    /// List system properties
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a profile value
    Set {
        /// Profile key: controller, username, password_env or timeout
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
