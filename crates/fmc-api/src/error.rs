use thiserror::Error;

/// Top-level error type for the `fmc-api` crate.
///
/// Covers every failure mode across the API surfaces:
/// authentication, transport, and the platform/configuration endpoints.
/// `fmc-cli` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token generation failed (wrong credentials, missing token header, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── REST API ────────────────────────────────────────────────────
    /// Non-success response from a platform or configuration endpoint.
    ///
    /// `message` comes from [`status_message`], so callers can print it
    /// verbatim.
    #[error("HTTP {status} - {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates bad or missing credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Api { status: 401, .. }
        )
    }

    /// The HTTP status behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Map an HTTP status to the fixed human-readable message reported for
/// failed REST calls.
///
/// Statuses outside the table fall back to the canonical reason phrase.
pub fn status_message(status: reqwest::StatusCode) -> String {
    match status.as_u16() {
        400 => {
            "Bad Request - The server could not understand the request due to invalid syntax."
                .to_owned()
        }
        401 => {
            "Unauthorized - Authentication is required and has failed or has not yet been provided."
                .to_owned()
        }
        403 => "Forbidden - The client does not have access rights to the content.".to_owned(),
        404 => "Not Found - The server can not find the requested resource.".to_owned(),
        422 => {
            "Unprocessable Entity - The server understands the content type of the request \
             entity, but was unable to process the contained instructions."
                .to_owned()
        }
        500 => {
            "Internal Server Error - The server has encountered a situation it doesn't know how \
             to handle."
                .to_owned()
        }
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_owned(),
    }
}
