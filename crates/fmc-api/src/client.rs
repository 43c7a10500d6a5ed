// FMC REST HTTP client
//
// Wraps `reqwest::Client` with FMC-specific URL construction and response
// handling. Endpoint groups (domains, device records) are implemented as
// inherent methods via separate files to keep this module focused on
// transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::{Error, status_message};

/// Authenticated HTTP client for the FMC REST API.
///
/// Built by [`FmcClient::connect`], which performs the token exchange;
/// every request issued afterwards carries the `X-auth-access-token`
/// default header. Platform endpoints live under `/api/fmc_platform/v1/`,
/// configuration endpoints under `/api/fmc_config/v1/domain/{uuid}/`.
pub struct FmcClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FmcClient {
    /// Create a client from a pre-built `reqwest::Client`.
    ///
    /// The client is expected to already carry the session token in its
    /// default headers (see [`FmcClient::connect`], which handles this).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The management center base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Normalize a management center address into a base URL.
    ///
    /// A bare host or IP gets an `https://` scheme; addresses that already
    /// carry a scheme are parsed verbatim.
    pub fn base_url_for(host: &str) -> Result<Url, Error> {
        let addr = if host.contains("://") {
            host.to_owned()
        } else {
            format!("https://{host}")
        };
        Url::parse(&addr).map_err(Error::InvalidUrl)
    }

    /// Build a platform-level URL: `{base}/api/fmc_platform/v1/{path}`
    pub(crate) fn platform_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("/api/fmc_platform/v1/{path}"))
            .map_err(Error::InvalidUrl)
    }

    /// Build a domain-scoped configuration URL:
    /// `{base}/api/fmc_config/v1/domain/{uuid}/{path}`
    pub(crate) fn config_url(&self, domain_uuid: &Uuid, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("/api/fmc_config/v1/domain/{domain_uuid}/{path}"))
            .map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and deserialize the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::parse_json(resp).await
    }

    /// Send a POST request with a JSON body, discarding the response body.
    ///
    /// Device registration replies with a background task reference the
    /// caller has no use for, so only the status is inspected.
    pub(crate) async fn post(&self, url: Url, body: &impl Serialize) -> Result<(), Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::check_status(&resp)
    }

    /// Parse a JSON response body, mapping non-success statuses to
    /// `Error::Api` first.
    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        Self::check_status(&resp)?;

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.clone(),
        })
    }

    /// Map a non-success status to `Error::Api` with the fixed message
    /// table from [`status_message`].
    fn check_status(resp: &reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Error::Api {
            status: status.as_u16(),
            message: status_message(status),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_scheme() {
        let url = FmcClient::base_url_for("192.168.45.45").unwrap();
        assert_eq!(url.as_str(), "https://192.168.45.45/");
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let url = FmcClient::base_url_for("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn garbage_host_is_rejected() {
        assert!(FmcClient::base_url_for("http://").is_err());
    }

    #[test]
    fn url_builders_compose_api_paths() {
        let base = FmcClient::base_url_for("fmc.example.net").unwrap();
        let client = FmcClient::with_client(reqwest::Client::new(), base);

        let platform = client.platform_url("info/domain").unwrap();
        assert_eq!(
            platform.as_str(),
            "https://fmc.example.net/api/fmc_platform/v1/info/domain"
        );

        let uuid: Uuid = "e276abec-e0f2-11e3-8169-6d9ed49b625f".parse().unwrap();
        let config = client.config_url(&uuid, "devices/devicerecords").unwrap();
        assert_eq!(
            config.as_str(),
            "https://fmc.example.net/api/fmc_config/v1/domain/e276abec-e0f2-11e3-8169-6d9ed49b625f/devices/devicerecords"
        );
    }
}
