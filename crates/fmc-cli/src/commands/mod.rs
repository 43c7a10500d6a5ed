//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod devices;
pub mod domains;

use tracing::{debug, info};

use fmc_api::FmcClient;

use crate::cli::{Command, GlobalOpts};
use crate::config::RunConfig;
use crate::error::CliError;

/// Dispatch a management-center-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(args, global).await,
        Command::Domains(args) => domains::handle(args, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}

/// Authenticate against the management center.
///
/// Every command starts here; any failure is fatal for the whole run.
pub(crate) async fn connect(cfg: &RunConfig, global: &GlobalOpts) -> Result<FmcClient, CliError> {
    debug!(host = %cfg.host, user = %cfg.username, "authenticating");

    let client =
        FmcClient::connect(&cfg.host, &cfg.username, &cfg.password, &cfg.transport).await?;

    info!("authenticated to {}", cfg.host);
    if !global.quiet {
        eprintln!("Authenticated to {}", cfg.host);
    }
    Ok(client)
}
