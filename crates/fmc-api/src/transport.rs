// HTTP client construction shared by the token exchange and the
// authenticated session.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("fmc-cli/", env!("CARGO_PKG_VERSION"));

/// Server certificate handling for the management center connection.
///
/// Appliances ship with self-signed certificates, so verification is off
/// unless the operator opts in.
#[derive(Debug, Clone)]
pub enum CertPolicy {
    /// Trust any certificate the server presents.
    TrustAny,
    /// Validate against a CA bundle loaded from a PEM file.
    PinnedCa(PathBuf),
    /// Validate against the system trust store.
    SystemRoots,
}

/// Connection settings applied to every HTTP client this crate builds.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub certs: CertPolicy,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            certs: CertPolicy::TrustAny,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a plain `reqwest::Client` for the token exchange.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        self.configure(reqwest::Client::builder())?
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Build a `reqwest::Client` that sends `headers` with every request.
    ///
    /// The session token rides in as a default header after authentication.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, Error> {
        self.configure(reqwest::Client::builder())?
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    fn configure(&self, builder: reqwest::ClientBuilder) -> Result<reqwest::ClientBuilder, Error> {
        let builder = builder.timeout(self.timeout).user_agent(USER_AGENT);

        Ok(match &self.certs {
            CertPolicy::TrustAny => builder.danger_accept_invalid_certs(true),
            CertPolicy::PinnedCa(path) => {
                let pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let ca = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder.add_root_certificate(ca)
            }
            CertPolicy::SystemRoots => builder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_a_client() {
        assert!(TransportConfig::default().build_client().is_ok());
    }

    #[test]
    fn missing_ca_file_is_reported() {
        let config = TransportConfig {
            certs: CertPolicy::PinnedCa(PathBuf::from("/nonexistent/ca.pem")),
            ..TransportConfig::default()
        };
        match config.build_client() {
            Err(Error::Tls(message)) => assert!(message.contains("CA cert")),
            other => panic!("expected Tls error, got {other:?}"),
        }
    }
}
