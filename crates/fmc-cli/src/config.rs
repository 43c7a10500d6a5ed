//! CLI-owned configuration: the JSON config file, environment overrides,
//! and credential resolution.
//!
//! `fmc-api` never sees these types -- it receives a host string, resolved
//! credentials, and a pre-built `TransportConfig`.

use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Json},
};
use secrecy::SecretString;
use serde::Deserialize;

use fmc_api::transport::{CertPolicy, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── JSON config structs ──────────────────────────────────────────────

/// On-disk configuration (`config.json`) with `FMC_*` environment
/// overrides merged on top.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Management center address: bare host/IP (scheme defaults to
    /// `https`) or a full URL.
    #[serde(alias = "host")]
    pub fmc_ip: String,

    /// API username.
    pub username: String,

    /// API password. Optional on disk; resolution falls back to
    /// `FMC_PASSWORD` or an interactive prompt.
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Devices to register, in config-file order.
    pub ftd_devices: Vec<DeviceEntry>,
}

/// One device descriptor from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceEntry {
    pub name: String,
    pub ip: String,
}

/// Fully-resolved run inputs after applying CLI flag overrides.
#[derive(Debug)]
pub struct RunConfig {
    pub host: String,
    pub username: String,
    pub password: SecretString,
    pub devices: Vec<DeviceEntry>,
    pub transport: TransportConfig,
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the config file and merge the `FMC_PASSWORD` environment variable.
///
/// Host and username env overrides ride in on the clap `env` attributes,
/// so only the password (which has no flag) merges here. A missing file
/// is reported before figment runs so the diagnostic can name the path;
/// everything else (malformed JSON, missing keys) surfaces as the figment
/// extraction error.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    if !path.exists() {
        return Err(CliError::NoConfig {
            path: path.display().to_string(),
        });
    }

    let figment = Figment::new()
        .merge(Json::file(path))
        .merge(Env::prefixed("FMC_").only(&["password"]));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Run resolution ───────────────────────────────────────────────────

/// Merge the loaded config with global CLI flags and resolve credentials.
///
/// Precedence is flag > environment > file. Clap resolves flag-vs-env for
/// host and username; the password env merge happens in [`load_config`].
pub fn resolve(global: &GlobalOpts) -> Result<RunConfig, CliError> {
    let config = load_config(&global.config)?;

    let host = global.host.clone().unwrap_or(config.fmc_ip);
    let username = global.username.clone().unwrap_or(config.username);
    let password = resolve_password(config.password, &username)?;

    let certs = if let Some(ref ca_path) = global.ca_cert {
        CertPolicy::PinnedCa(ca_path.clone())
    } else if global.verify_tls {
        CertPolicy::SystemRoots
    } else {
        CertPolicy::TrustAny
    };

    Ok(RunConfig {
        host,
        username,
        password,
        devices: config.ftd_devices,
        transport: TransportConfig {
            certs,
            timeout: Duration::from_secs(global.timeout),
        },
    })
}

/// Password chain: config file / `FMC_PASSWORD` -> interactive prompt.
fn resolve_password(
    configured: Option<SecretString>,
    username: &str,
) -> Result<SecretString, CliError> {
    // 1. Config file or FMC_PASSWORD (already merged by figment)
    if let Some(password) = configured {
        return Ok(password);
    }

    // 2. Hidden prompt, only when attached to a terminal. Scripted runs
    //    get a clear error instead of hanging on a read.
    if std::io::stdin().is_terminal() {
        let password = rpassword::prompt_password(format!("Password for {username}: "))?;
        if !password.is_empty() {
            return Ok(SecretString::from(password));
        }
    }

    Err(CliError::NoCredentials)
}
