//! CLI error types with miette diagnostics.
//!
//! Maps `fmc_api::Error` variants into user-facing errors with actionable
//! help text. Every failure exits with the same status; the diagnostic
//! text and the run log carry the detail.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(
        code(fmc::no_config),
        help(
            "Expected at: {path}\n\
             Point --config (or FMC_CONFIG) at your config.json."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(fmc::config))]
    Config(Box<figment::Error>),

    #[error("No password available")]
    #[diagnostic(
        code(fmc::no_credentials),
        help("Add \"password\" to the config file or set FMC_PASSWORD.")
    )]
    NoCredentials,

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to the management center at {url}")]
    #[diagnostic(
        code(fmc::connection_failed),
        help("Check that the management center is running and reachable.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS configuration error: {message}")]
    #[diagnostic(
        code(fmc::tls_error),
        help("Check the --ca-cert path and PEM contents.")
    )]
    Tls { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(fmc::auth_failed),
        help("Verify the username and password for the management center.")
    )]
    AuthFailed { message: String },

    // ── Domains ──────────────────────────────────────────────────────

    #[error("The management center returned no domains")]
    #[diagnostic(
        code(fmc::no_domains),
        help("Verify the account has access to at least one domain.")
    )]
    NoDomains,

    #[error("Domain '{identifier}' not found")]
    #[diagnostic(code(fmc::domain_not_found), help("Available domains: {available}"))]
    DomainNotFound {
        identifier: String,
        available: String,
    },

    #[error("Invalid domain selection: {reason}")]
    #[diagnostic(
        code(fmc::selection),
        help("Answer with a number from the list shown, or pass --domain.")
    )]
    Selection { reason: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(fmc::api_error))]
    Api { status: u16, message: String },

    #[error("Unexpected response from the management center: {message}")]
    #[diagnostic(code(fmc::bad_response))]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fmc::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

// ── fmc_api::Error → CliError mapping ────────────────────────────────

impl From<fmc_api::Error> for CliError {
    fn from(err: fmc_api::Error) -> Self {
        match err {
            fmc_api::Error::Authentication { message } => CliError::AuthFailed { message },

            fmc_api::Error::Transport(e) => {
                let url = e
                    .url()
                    .map_or_else(|| "(unknown)".to_owned(), |u| u.to_string());
                CliError::ConnectionFailed {
                    url,
                    source: e.into(),
                }
            }

            fmc_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "host".into(),
                reason: e.to_string(),
            },

            fmc_api::Error::Tls(message) => CliError::Tls { message },

            fmc_api::Error::Api { status, message } => CliError::Api { status, message },

            fmc_api::Error::Deserialization { message, .. } => {
                CliError::BadResponse { message }
            }
        }
    }
}
