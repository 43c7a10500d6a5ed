// Token authentication
//
// FMC issues an `X-auth-access-token` header from the generatetoken
// endpoint; every subsequent request must echo it. The token is installed
// as a default header on the authenticated client, so endpoint methods
// never handle it explicitly.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::FmcClient;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Name of the FMC session token header.
pub const AUTH_TOKEN_HEADER: &str = "X-auth-access-token";

impl FmcClient {
    /// Authenticate against the management center and return a ready client.
    ///
    /// Sends `POST /api/fmc_platform/v1/auth/generatetoken` with HTTP Basic
    /// credentials, captures the `X-auth-access-token` response header, and
    /// rebuilds the HTTP client with that token as a default header.
    ///
    /// `host` may be a bare hostname/IP (scheme defaults to `https`) or a
    /// full URL.
    pub async fn connect(
        host: &str,
        username: &str,
        password: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Self::base_url_for(host)?;
        let url = base_url
            .join("/api/fmc_platform/v1/auth/generatetoken")
            .map_err(Error::InvalidUrl)?;

        debug!("requesting auth token from {}", url);

        let bootstrap = transport.build_client()?;
        let resp = bootstrap
            .post(url)
            .basic_auth(username, Some(password.expose_secret()))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {}): {body}", status.as_u16()),
            });
        }

        let token = resp
            .headers()
            .get(AUTH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| Error::Authentication {
                message: format!("response carried no {AUTH_TOKEN_HEADER} header"),
            })?;

        let mut token_value = HeaderValue::from_str(&token).map_err(|_| Error::Authentication {
            message: format!("{AUTH_TOKEN_HEADER} header value is not valid"),
        })?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, token_value);

        let http = transport.build_client_with_headers(headers)?;

        debug!("authentication successful");
        Ok(Self::with_client(http, base_url))
    }
}
