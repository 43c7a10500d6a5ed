//! Device command handlers: the FTD registration run.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use tracing::{error, info};
use uuid::Uuid;

use fmc_api::models::{DeviceRecord, Domain};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: DevicesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::Add { domain } => add(domain.as_deref(), global).await,
    }
}

// ── Registration run ─────────────────────────────────────────────────

/// The full registration sequence: authenticate, pick a domain, create
/// one device record per config entry.
///
/// Per-device failures are reported and skipped so one rejected record
/// never blocks the rest; everything before the device loop is fatal.
async fn add(domain_arg: Option<&str>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::resolve(global)?;
    info!(
        host = %cfg.host,
        devices = cfg.devices.len(),
        "starting registration run"
    );

    let client = super::connect(&cfg, global).await?;

    let domains = client.list_domains().await?;
    if domains.is_empty() {
        return Err(CliError::NoDomains);
    }

    let selected = match domain_arg {
        Some(identifier) => resolve_domain(&domains, identifier)?,
        None => prompt_for_domain(&domains)?,
    };
    info!(domain = %selected.name, uuid = %selected.uuid, "domain selected");

    let use_color = output::should_color(&global.color);
    let mut registered = 0usize;

    for device in &cfg.devices {
        let record = DeviceRecord::ftd(&device.name, &device.ip);
        match client.create_device(&selected.uuid, &record).await {
            Ok(()) => {
                registered += 1;
                info!(device = %device.name, ip = %device.ip, "device record created");
                if !global.quiet {
                    if use_color {
                        eprintln!(
                            "{} Successfully added FTD device {}",
                            "✓".green(),
                            device.name
                        );
                    } else {
                        eprintln!("Successfully added FTD device {}", device.name);
                    }
                }
            }
            Err(e) => {
                error!(device = %device.name, "failed to add FTD device: {e}");
                if use_color {
                    eprintln!("{} Failed to add FTD device {}: {e}", "✗".red(), device.name);
                } else {
                    eprintln!("Failed to add FTD device {}: {e}", device.name);
                }
            }
        }
    }

    info!(
        registered,
        total = cfg.devices.len(),
        "registration run finished"
    );
    if !global.quiet {
        eprintln!(
            "Registered {registered} of {} device(s) in domain '{}'",
            cfg.devices.len(),
            selected.name
        );
    }
    Ok(())
}

// ── Domain selection ─────────────────────────────────────────────────

/// Resolve a `--domain` identifier (UUID or name, case-insensitive)
/// against the fetched list.
fn resolve_domain<'a>(domains: &'a [Domain], identifier: &str) -> Result<&'a Domain, CliError> {
    let as_uuid = identifier.parse::<Uuid>().ok();

    for domain in domains {
        if as_uuid.is_some_and(|u| u == domain.uuid)
            || domain.name.eq_ignore_ascii_case(identifier)
        {
            return Ok(domain);
        }
    }

    Err(CliError::DomainNotFound {
        identifier: identifier.to_owned(),
        available: domains
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Print the numbered domain list on stdout and read a 1-based ordinal
/// from stdin.
///
/// One read, no re-prompting: a bad answer aborts the run before any
/// device call is made.
fn prompt_for_domain(domains: &[Domain]) -> Result<&Domain, CliError> {
    println!("Available Domains:");
    for (index, domain) in domains.iter().enumerate() {
        println!(
            "{}. Domain Name: {}, Domain UUID: {}",
            index + 1,
            domain.name,
            domain.uuid
        );
    }

    print!("Enter the number of the domain to use: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let index = parse_selection(&line, domains.len())?;
    Ok(&domains[index])
}

/// Parse a 1-based ordinal answer against the list length, returning the
/// 0-based index.
fn parse_selection(answer: &str, count: usize) -> Result<usize, CliError> {
    let answer = answer.trim();

    let ordinal: usize = answer.parse().map_err(|_| CliError::Selection {
        reason: format!("'{answer}' is not a number"),
    })?;

    if ordinal == 0 || ordinal > count {
        return Err(CliError::Selection {
            reason: format!("{ordinal} is out of range (1-{count})"),
        });
    }

    Ok(ordinal - 1)
}
