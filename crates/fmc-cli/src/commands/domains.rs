//! Domain command handlers.

use tabled::Tabled;

use fmc_api::models::Domain;

use crate::cli::{DomainsArgs, DomainsCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DomainRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Type")]
    domain_type: String,
}

impl From<&Domain> for DomainRow {
    fn from(d: &Domain) -> Self {
        Self {
            name: d.name.clone(),
            uuid: d.uuid.to_string(),
            domain_type: d.domain_type.clone().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: DomainsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DomainsCommand::List => {
            let cfg = config::resolve(global)?;
            let client = super::connect(&cfg, global).await?;

            let domains = client.list_domains().await?;
            let out = output::render_list(
                &global.output,
                &domains,
                |d| DomainRow::from(d),
                |d| d.uuid.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
