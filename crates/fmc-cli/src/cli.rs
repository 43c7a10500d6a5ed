//! Clap derive structures for the `fmc` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fmc -- register FTD devices with a Secure Firewall Management Center
#[derive(Debug, Parser)]
#[command(
    name = "fmc",
    version,
    about = "Register FTD devices with a Secure Firewall Management Center",
    long_about = "Drives the FMC REST API from the command line: authenticates,\n\
        discovers the management center's administrative domains, and registers\n\
        the FTD device records described by a JSON config file.",
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
    /// Path to the JSON config file
    #[arg(
        long,
        short = 'c',
        env = "FMC_CONFIG",
        default_value = "config.json",
        global = true
    )]
    pub config: PathBuf,

    /// Management center address (overrides the config file)
    #[arg(long, env = "FMC_HOST", global = true)]
    pub host: Option<String>,

    /// API username (overrides the config file)
    #[arg(long, short = 'u', env = "FMC_USERNAME", global = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FMC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase stderr verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verify the management center's TLS certificate (self-signed certs
    /// are accepted by default)
    #[arg(long, env = "FMC_VERIFY_TLS", global = true)]
    pub verify_tls: bool,

    /// Custom CA certificate (PEM) for TLS verification
    #[arg(long, env = "FMC_CA_CERT", global = true, value_name = "PEM")]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "FMC_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,

    /// Append-only run log
    #[arg(
        long,
        env = "FMC_LOG_FILE",
        default_value = "fmc_add_ftd.log",
        global = true
    )]
    pub log_file: PathBuf,
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
    /// Register FTD devices from the config file
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Inspect the management center's administrative domains
    #[command(alias = "dom")]
    Domains(DomainsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// Register every device listed in the config file into a domain
    #[command(alias = "register")]
    Add {
        /// Target domain (name or UUID); skips the interactive prompt
        #[arg(long, short = 'd', env = "FMC_DOMAIN")]
        domain: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DOMAINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DomainsArgs {
    #[command(subcommand)]
    pub command: DomainsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DomainsCommand {
    /// List administrative domains
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
